// src/domain/status.rs

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::report::{ChecklistItem, ItemStatus, KerusakanLain, ReportStatus};

// Status operacional do veículo no dia, derivado do histórico de checklists.
// Diferente do ReportStatus persistido: aqui existe o estado "Not Checked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum DerivedStatus {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    #[serde(rename = "Damaged")]
    Damaged,
    #[serde(rename = "Not Checked")]
    NotChecked,
}

impl DerivedStatus {
    // Veículo elegível para abertura de ordem de serviço
    pub fn needs_workshop(self) -> bool {
        matches!(self, DerivedStatus::Damaged | DerivedStatus::NeedsAttention)
    }
}

impl From<ReportStatus> for DerivedStatus {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Good => DerivedStatus::Good,
            ReportStatus::NeedsAttention => DerivedStatus::NeedsAttention,
            ReportStatus::Damaged => DerivedStatus::Damaged,
        }
    }
}

// Deriva o status geral de um checklist recém-preenchido:
// qualquer item RUSAK (ou dano avulso) => Damaged;
// senão, qualquer PERLU PERHATIAN => Needs Attention; senão Good.
pub fn derive_overall(items: &[ChecklistItem], kerusakan_lain: Option<&KerusakanLain>) -> ReportStatus {
    let has_damage = kerusakan_lain.is_some_and(|k| !k.keterangan.trim().is_empty())
        || items.iter().any(|i| i.status == ItemStatus::Rusak);
    if has_damage {
        return ReportStatus::Damaged;
    }
    if items.iter().any(|i| i.status == ItemStatus::PerluPerhatian) {
        return ReportStatus::NeedsAttention;
    }
    ReportStatus::Good
}

// Status do dia a partir do checklist mais recente do veículo.
// Um "Good" de dia anterior NÃO vale para hoje (força o re-check diário);
// dano/atenção de dias anteriores persiste até um checklist novo superá-lo.
pub fn derive_vehicle_status(
    latest: Option<(ReportStatus, NaiveDate)>,
    today: NaiveDate,
) -> DerivedStatus {
    match latest {
        None => DerivedStatus::NotChecked,
        Some((status, report_date)) if report_date == today => status.into(),
        Some((ReportStatus::Damaged, _)) => DerivedStatus::Damaged,
        Some((ReportStatus::NeedsAttention, _)) => DerivedStatus::NeedsAttention,
        Some((ReportStatus::Good, _)) => DerivedStatus::NotChecked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: ItemStatus) -> ChecklistItem {
        ChecklistItem {
            id: "ban".to_string(),
            label: "Ban".to_string(),
            status,
            keterangan: String::new(),
            photo: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn overall_rusak_vence_tudo() {
        let items = vec![item(ItemStatus::Baik), item(ItemStatus::Rusak), item(ItemStatus::PerluPerhatian)];
        assert_eq!(derive_overall(&items, None), ReportStatus::Damaged);
    }

    #[test]
    fn overall_kerusakan_lain_tambem_e_dano() {
        let items = vec![item(ItemStatus::Baik)];
        let lain = KerusakanLain {
            keterangan: "Vazamento de óleo no cubo".to_string(),
            photo: None,
        };
        assert_eq!(derive_overall(&items, Some(&lain)), ReportStatus::Damaged);
    }

    #[test]
    fn overall_kerusakan_lain_vazio_nao_conta() {
        let items = vec![item(ItemStatus::Baik)];
        let lain = KerusakanLain {
            keterangan: "   ".to_string(),
            photo: None,
        };
        assert_eq!(derive_overall(&items, Some(&lain)), ReportStatus::Good);
    }

    #[test]
    fn overall_perlu_perhatian_sem_rusak() {
        let items = vec![item(ItemStatus::Baik), item(ItemStatus::PerluPerhatian)];
        assert_eq!(derive_overall(&items, None), ReportStatus::NeedsAttention);
    }

    #[test]
    fn overall_tudo_baik() {
        let items = vec![item(ItemStatus::Baik), item(ItemStatus::Baik)];
        assert_eq!(derive_overall(&items, None), ReportStatus::Good);
    }

    // Propriedade 1: sem histórico => "Not Checked"
    #[test]
    fn sem_report_e_not_checked() {
        assert_eq!(derive_vehicle_status(None, day(10)), DerivedStatus::NotChecked);
    }

    // Propriedade 2: report de hoje vale verbatim
    #[test]
    fn report_de_hoje_vale_verbatim() {
        for status in [ReportStatus::Good, ReportStatus::NeedsAttention, ReportStatus::Damaged] {
            assert_eq!(
                derive_vehicle_status(Some((status, day(10))), day(10)),
                status.into()
            );
        }
    }

    // Propriedade 3: "Good" de ontem NÃO persiste
    #[test]
    fn good_de_ontem_vira_not_checked() {
        assert_eq!(
            derive_vehicle_status(Some((ReportStatus::Good, day(9))), day(10)),
            DerivedStatus::NotChecked
        );
    }

    #[test]
    fn dano_de_ontem_persiste() {
        assert_eq!(
            derive_vehicle_status(Some((ReportStatus::Damaged, day(3))), day(10)),
            DerivedStatus::Damaged
        );
        assert_eq!(
            derive_vehicle_status(Some((ReportStatus::NeedsAttention, day(9))), day(10)),
            DerivedStatus::NeedsAttention
        );
    }
}

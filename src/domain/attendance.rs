// src/domain/attendance.rs

use chrono::NaiveTime;

// Política de janelas de ponto. Os limites (03:00, 16:00, 17:00-17:14,
// 02:00) codificam o regime de turnos da operação e são mantidos
// literais de propósito - não generalizar em "turnos" configuráveis.

pub const MASUK_STATUS_ON_TIME: &str = "Tepat Waktu";
pub const MASUK_STATUS_LATE: &str = "Terlambat";

// Resultado da checagem da janela de entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasukWindow {
    Open,
    // Antes das 03:00: "ainda não disponível"
    NotYetOpen,
    // A partir das 16:00: "janela encerrada"
    Closed,
}

pub fn masuk_window(time: NaiveTime) -> MasukWindow {
    let open = NaiveTime::from_hms_opt(3, 0, 0).unwrap();
    let close = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
    if time < open {
        MasukWindow::NotYetOpen
    } else if time >= close {
        MasukWindow::Closed
    } else {
        MasukWindow::Open
    }
}

// Pontualidade da entrada: até 07:30:00 inclusive é "Tepat Waktu".
// Regra separada da janela de habilitação acima.
pub fn masuk_status(time: NaiveTime) -> &'static str {
    let cutoff = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
    if time <= cutoff {
        MASUK_STATUS_ON_TIME
    } else {
        MASUK_STATUS_LATE
    }
}

// Janela de saída: a partir das 17:15 (blackout dos 15 primeiros minutos
// depois das 17:00) OU antes das 02:00 (turno que vira a madrugada).
pub fn pulang_window_open(time: NaiveTime) -> bool {
    use chrono::Timelike;
    let hour = time.hour();
    let minute = time.minute();
    (hour >= 17 && !(hour == 17 && minute < 15)) || hour < 2
}

// Resultado da checagem completa da saída
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulangCheck {
    Ok,
    // Sem entrada no mesmo dia de calendário: rejeita ANTES da janela
    MissingMasuk,
    WindowClosed,
}

pub fn pulang_check(time: NaiveTime, has_masuk_today: bool) -> PulangCheck {
    if !has_masuk_today {
        return PulangCheck::MissingMasuk;
    }
    if !pulang_window_open(time) {
        return PulangCheck::WindowClosed;
    }
    PulangCheck::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    // Propriedade 5: limites exatos da janela de entrada
    #[test]
    fn janela_de_entrada_nos_limites() {
        assert_eq!(masuk_window(t(2, 59, 59)), MasukWindow::NotYetOpen);
        assert_eq!(masuk_window(t(3, 0, 0)), MasukWindow::Open);
        assert_eq!(masuk_window(t(15, 59, 59)), MasukWindow::Open);
        assert_eq!(masuk_window(t(16, 0, 0)), MasukWindow::Closed);
        assert_eq!(masuk_window(t(23, 30, 0)), MasukWindow::Closed);
    }

    // Propriedade 6: corte de pontualidade às 07:30:00 inclusive
    #[test]
    fn pontualidade_no_segundo_exato() {
        assert_eq!(masuk_status(t(6, 59, 0)), "Tepat Waktu");
        assert_eq!(masuk_status(t(7, 30, 0)), "Tepat Waktu");
        assert_eq!(masuk_status(t(7, 30, 1)), "Terlambat");
        assert_eq!(masuk_status(t(8, 0, 0)), "Terlambat");
    }

    #[test]
    fn saida_respeita_o_blackout_das_17h() {
        assert!(!pulang_window_open(t(16, 59, 59)));
        assert!(!pulang_window_open(t(17, 0, 0)));
        assert!(!pulang_window_open(t(17, 14, 59)));
        assert!(pulang_window_open(t(17, 15, 0)));
        assert!(pulang_window_open(t(23, 0, 0)));
    }

    #[test]
    fn saida_cobre_a_madrugada_ate_as_duas() {
        assert!(pulang_window_open(t(0, 30, 0)));
        assert!(pulang_window_open(t(1, 59, 59)));
        assert!(!pulang_window_open(t(2, 0, 0)));
        assert!(!pulang_window_open(t(12, 0, 0)));
    }

    // Propriedade 7: sem entrada no dia, saída é rejeitada mesmo dentro da janela
    #[test]
    fn saida_sem_entrada_e_rejeitada_independente_da_janela() {
        assert_eq!(pulang_check(t(18, 0, 0), false), PulangCheck::MissingMasuk);
        assert_eq!(pulang_check(t(12, 0, 0), false), PulangCheck::MissingMasuk);
        assert_eq!(pulang_check(t(12, 0, 0), true), PulangCheck::WindowClosed);
        assert_eq!(pulang_check(t(18, 0, 0), true), PulangCheck::Ok);
        assert_eq!(pulang_check(t(1, 0, 0), true), PulangCheck::Ok);
    }
}

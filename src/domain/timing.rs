// src/domain/timing.rs

use chrono::NaiveDateTime;

// Janela de tolerância em minutos ao redor do alvo da WO
const ON_TIME_BUFFER_MIN: i64 = 5;

// Classifica a pontualidade da conclusão de uma WO contra o alvo.
// diff = round((concluído - alvo) / 60s); |diff| <= 5 => "On Time";
// fora disso, "Early by"/"Late by" com horas e minutos sempre exibidos
// (ex.: "Late by 0 jam 47 menit").
pub fn classify_completion(target: NaiveDateTime, completed: NaiveDateTime) -> String {
    let diff_seconds = (completed - target).num_seconds();
    let diff_minutes = (diff_seconds as f64 / 60.0).round() as i64;

    if diff_minutes.abs() <= ON_TIME_BUFFER_MIN {
        return "On Time".to_string();
    }

    let magnitude = diff_minutes.abs();
    let hours = magnitude / 60;
    let minutes = magnitude % 60;

    if diff_minutes < 0 {
        format!("Early by {} jam {} menit", hours, minutes)
    } else {
        format!("Late by {} jam {} menit", hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn exemplo_atrasado_do_fluxo_real() {
        // alvo 10:00, concluído 10:47
        assert_eq!(classify_completion(dt(10, 0, 0), dt(10, 47, 0)), "Late by 0 jam 47 menit");
    }

    #[test]
    fn exemplo_adiantado_do_fluxo_real() {
        // alvo 10:00, concluído 08:10
        assert_eq!(classify_completion(dt(10, 0, 0), dt(8, 10, 0)), "Early by 1 jam 50 menit");
    }

    #[test]
    fn buffer_de_cinco_minutos_e_simetrico_e_inclusivo() {
        assert_eq!(classify_completion(dt(10, 0, 0), dt(10, 0, 0)), "On Time");
        assert_eq!(classify_completion(dt(10, 0, 0), dt(10, 5, 0)), "On Time");
        assert_eq!(classify_completion(dt(10, 0, 0), dt(9, 55, 0)), "On Time");
    }

    #[test]
    fn fora_do_buffer_tem_sinal_correto() {
        assert_eq!(classify_completion(dt(10, 0, 0), dt(10, 6, 0)), "Late by 0 jam 6 menit");
        assert_eq!(classify_completion(dt(10, 0, 0), dt(9, 54, 0)), "Early by 0 jam 6 menit");
    }

    #[test]
    fn meio_minuto_arredonda_para_fora_nos_dois_lados() {
        // 5min30s => 6 minutos nos dois sentidos
        assert_eq!(classify_completion(dt(10, 0, 0), dt(10, 5, 30)), "Late by 0 jam 6 menit");
        assert_eq!(classify_completion(dt(10, 0, 0), dt(9, 54, 30)), "Early by 0 jam 6 menit");
    }

    #[test]
    fn decomposicao_de_horas_e_minutos() {
        assert_eq!(classify_completion(dt(8, 0, 0), dt(11, 2, 0)), "Late by 3 jam 2 menit");
        assert_eq!(classify_completion(dt(23, 0, 0), dt(1, 30, 0)), "Early by 21 jam 30 menit");
    }
}

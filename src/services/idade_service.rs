// src/services/idade_service.rs
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Formato das datas de nascimento guardadas (ex: "15/06/2000").
pub const FORMATO_DATA_NASCIMENTO: &str = "%d/%m/%Y";

/// Idade em anos completos de quem nasceu em `nascimento`, na data `referencia`.
///
/// Só as datas contam (sem hora nem fuso). Um nascimento no futuro dá 0.
/// Quem nasceu a 29/02 faz anos a 01/03 nos anos não bissextos.
pub fn idade(nascimento: NaiveDate, referencia: NaiveDate) -> u32 {
    if referencia < nascimento {
        return 0;
    }

    let mut anos = referencia.year() - nascimento.year();
    if aniversario(nascimento, anos) > referencia {
        anos -= 1;
    }
    anos.max(0) as u32
}

/// Como [`idade`], mas com a referência num instante qualquer; o instante
/// é convertido para UTC antes de descartar a hora.
pub fn idade_em<Tz: TimeZone>(nascimento: NaiveDate, referencia: &DateTime<Tz>) -> u32 {
    idade(nascimento, referencia.with_timezone(&Utc).date_naive())
}

/// Idade atual a partir do texto de `birth_date`; `None` se não for uma data válida.
pub fn idade_hoje(data_nascimento: &str) -> Option<u32> {
    let nascimento = parse_data_nascimento(data_nascimento)?;
    Some(idade_em(nascimento, &Utc::now()))
}

pub fn parse_data_nascimento(texto: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(texto.trim(), FORMATO_DATA_NASCIMENTO).ok()
}

// Dia/mês do nascimento avançado `anos` anos
fn aniversario(nascimento: NaiveDate, anos: i32) -> NaiveDate {
    let ano = nascimento.year() + anos;
    match NaiveDate::from_ymd_opt(ano, nascimento.month(), nascimento.day()) {
        Some(data) => data,
        // 29/02 num ano não bissexto passa para 01/03
        None => NaiveDate::from_ymd_opt(ano, 3, 1).unwrap_or(NaiveDate::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn aniversario_no_proprio_dia() {
        assert_eq!(idade(data(2000, 1, 1), data(2020, 1, 1)), 20);
    }

    #[test]
    fn aniversario_ainda_por_chegar() {
        assert_eq!(idade(data(2000, 6, 15), data(2020, 1, 1)), 19);
        assert_eq!(idade(data(2000, 6, 15), data(2020, 6, 14)), 19);
        assert_eq!(idade(data(2000, 6, 15), data(2020, 6, 15)), 20);
    }

    #[test]
    fn nascimento_no_futuro_da_zero() {
        assert_eq!(idade(data(2030, 1, 1), data(2020, 1, 1)), 0);
        assert_eq!(idade(data(2020, 1, 2), data(2020, 1, 1)), 0);
    }

    #[test]
    fn mesmo_dia_do_nascimento_da_zero() {
        assert_eq!(idade(data(2020, 5, 5), data(2020, 5, 5)), 0);
    }

    #[test]
    fn nascido_a_29_de_fevereiro() {
        assert_eq!(idade(data(2000, 2, 29), data(2001, 2, 28)), 0);
        assert_eq!(idade(data(2000, 2, 29), data(2001, 3, 1)), 1);
        assert_eq!(idade(data(2000, 2, 29), data(2004, 2, 29)), 4);
    }

    #[test]
    fn referencia_com_fuso_usa_a_data_em_utc() {
        let fuso = FixedOffset::west_opt(3 * 3600).unwrap();
        // 14/06 23:30 a -03:00 já é 15/06 02:30 em UTC
        let referencia = fuso.with_ymd_and_hms(2020, 6, 14, 23, 30, 0).unwrap();
        assert_eq!(idade_em(data(2000, 6, 15), &referencia), 20);

        // 15/06 01:00 a +03:00 ainda é 14/06 em UTC
        let fuso = FixedOffset::east_opt(3 * 3600).unwrap();
        let referencia = fuso.with_ymd_and_hms(2020, 6, 15, 1, 0, 0).unwrap();
        assert_eq!(idade_em(data(2000, 6, 15), &referencia), 19);
    }

    #[test]
    fn parse_formato_dia_mes_ano() {
        assert_eq!(parse_data_nascimento("15/06/2000"), Some(data(2000, 6, 15)));
        assert_eq!(parse_data_nascimento("2000-06-15"), None);
        assert_eq!(parse_data_nascimento("31/02/2000"), None);
        assert_eq!(parse_data_nascimento(""), None);
    }

    #[test]
    fn idade_hoje_ignora_datas_invalidas() {
        assert_eq!(idade_hoje("não é data"), None);
        assert!(idade_hoje("01/01/2000").is_some());
    }
}

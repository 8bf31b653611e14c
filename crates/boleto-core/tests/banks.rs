//! End-to-end barcode and linha digitável tests for every bank, using the
//! banks' own documentation examples.

use boleto_core::banks::*;
use boleto_core::{
    barcode_from_digitable_line, Bank, Boleto, BoletoConfig, BoletoError, ExpirationConfig,
    ExpirationOverflow, NumericString,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn n(s: &str) -> Option<NumericString> {
    Some(s.parse().unwrap())
}

fn date(s: &str) -> Option<NaiveDate> {
    Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
}

fn amount(s: &str) -> Option<Decimal> {
    Some(s.parse().unwrap())
}

fn slip(bank: Bank, due: &str, value: &str) -> Boleto {
    Boleto {
        amount: amount(value),
        due_date: date(due),
        ..Boleto::new(bank)
    }
}

fn assert_slip(boleto: &Boleto, barcode: &str, line: &str) {
    let config = BoletoConfig::default();
    let computed = boleto.barcode(&config).unwrap();
    assert_eq!(computed.as_str(), barcode);
    assert_eq!(computed.digitable_line(), line);
    assert_eq!(barcode_from_digitable_line(line).unwrap(), computed);
}

#[test]
fn test_santander() {
    let bank = Bank::Santander(Santander {
        assignee_code: n("0707077"),
        document_number: n("000001234567"),
        wallet: n("102"),
        ..Default::default()
    });
    assert_slip(
        &slip(bank, "2012-12-28", "2952.95"),
        "03391556100002952959070707700000123456790102",
        "03399.07073 07700.000123 34567.901029 1 55610000295295",
    );
}

#[test]
fn test_bradesco() {
    let bank = Bank::Bradesco(Bradesco {
        agency: n("1172"),
        account: n("403005"),
        wallet: n("6"),
        document_number: n("75896452"),
        ..Default::default()
    });
    assert_slip(
        &slip(bank, "2012-12-28", "2952.95"),
        "23796556100002952951172060007589645204030050",
        "23791.17209 60007.589645 52040.300502 6 55610000295295",
    );

    let bank = Bank::Bradesco(Bradesco {
        agency: n("1172"),
        account: n("403005"),
        wallet: n("9"),
        document_number: n("175896451"),
        ..Default::default()
    });
    assert_slip(
        &slip(bank, "2012-12-28", "2959.78"),
        "23791556100002959781172090017589645104030050",
        "23791.17209 90017.589640 51040.300504 1 55610000295978",
    );
}

#[test]
fn test_banrisul() {
    let bank = Bank::Banrisul(Banrisul {
        agency: n("100"),
        assignee_code: n("0000001"),
        document_number: n("22832563"),
        ..Default::default()
    });
    assert_slip(
        &slip(bank, "2004-07-04", "5.0"),
        "04197246200000005002110000000012283256304168",
        "04192.11008 00000.012286 32563.041683 7 24620000000500",
    );
}

#[test]
fn test_banco_do_brasil_layouts() {
    let bb = |assignee: &str, document: &str, agency: &str, account: &str| {
        Bank::BancoDoBrasil(BancoDoBrasil {
            agency: n(agency),
            account: n(account),
            assignee_code: n(assignee),
            wallet: n("18"),
            document_number: n(document),
            ..Default::default()
        })
    };

    assert_slip(
        &slip(bb("4321", "90801", "7123", "19345"), "2012-12-28", "2952.95"),
        "00193556100002952954321009080171230001934518",
        "00194.32103 09080.171235 00019.345180 3 55610000295295",
    );
    assert_slip(
        &slip(bb("555444", "12901", "5030", "14204195"), "2012-12-28", "14001.99"),
        "00197556100014001995554441290150301420419518",
        "00195.55440 41290.150303 14204.195185 7 55610001400199",
    );
    assert_slip(
        &slip(bb("555444", "12345678911234567", "5030", "14204195"), "2012-12-28", "14001.99"),
        "00194556100014001995554441234567891123456721",
        "00195.55440 41234.567893 11234.567219 4 55610001400199",
    );
    assert_slip(
        &slip(bb("7777777", "87654", "9999", "99999"), "2012-12-28", "2952.95"),
        "00197556100002952950000007777777000008765418",
        "00190.00009 07777.777009 00087.654182 7 55610000295295",
    );
    assert_slip(
        &slip(bb("77777778", "87654", "9999", "99999"), "2012-12-28", "2952.95"),
        "00191556100002952950000007777777800008765418",
        "00190.00009 07777.777801 00087.654182 1 55610000295295",
    );
}

#[test]
fn test_caixa() {
    let bank = Bank::Caixa(Caixa {
        agency: n("1333"),
        assignee_code: n("792157"),
        wallet: n("14"),
        document_number: n("946375189643625"),
    });
    assert_slip(
        &slip(bank, "2015-03-16", "2952.95"),
        "10492636900002952957921578946137541896436250",
        "10497.92151 78946.137540 18964.362505 2 63690000295295",
    );
}

#[test]
fn test_hsbc() {
    let bank = Bank::Hsbc(Hsbc {
        assignee_code: n("3485910"),
        document_number: n("43862"),
    });
    assert_slip(
        &slip(bank, "2024-02-18", "3740.58"),
        "39991963000003740583485910000000004386204942",
        "39993.48596 10000.000009 43862.049426 1 96300000374058",
    );
}

#[test]
fn test_itau() {
    let bank = Bank::Itau(Itau {
        agency: n("1565"),
        account: n("13877"),
        account_digit: n("1"),
        wallet: n("175"),
        document_number: n("12345678"),
        ..Default::default()
    });
    assert_slip(
        &slip(bank, "2012-12-21", "2952.95"),
        "34191555400002952951751234567861565138771000",
        "34191.75124 34567.861561 51387.710000 1 55540000295295",
    );
}

#[test]
fn test_real() {
    let bank = Bank::Real(Real {
        agency: n("501"),
        account: n("6703255"),
        document_number: n("3020"),
        ..Default::default()
    });
    assert_slip(
        &slip(bank, "2001-10-02", "35"),
        "35699145600000035000501670325510000000003020",
        "35690.50168 70325.510009 00000.030205 9 14560000003500",
    );
}

#[test]
fn test_sicoob() {
    let bank = Bank::Sicoob(Sicoob {
        agency: n("95"),
        assignee_code: n("6532"),
        document_number: n("1101"),
    });
    let boleto = Boleto {
        document_date: date("2015-01-10"),
        ..slip(bank, "2019-02-17", "93015.78")
    };
    assert_slip(
        &boleto,
        "75692780300093015781009501000653215001101001",
        "75691.00956 01000.653210 50011.010019 2 78030009301578",
    );
}

#[test]
fn test_sicredi() {
    let sicredi = |wallet: &str| {
        let bank = Bank::Sicredi(Sicredi {
            agency: n("8136"),
            post: n("34"),
            account: n("62918"),
            byte_id: n("3"),
            wallet: n(wallet),
            document_number: n("87264"),
        });
        Boleto {
            document_date: date("2015-06-30"),
            ..slip(bank, "2006-10-29", "8013.65")
        }
    };

    assert_slip(
        &sicredi("31"),
        "74894330900008013653115387264581363462918104",
        "74893.11535 87264.581361 34629.181040 4 33090000801365",
    );
    assert_slip(
        &sicredi("11"),
        "74895330900008013651115387264581363462918100",
        "74891.11539 87264.581361 34629.181008 5 33090000801365",
    );
}

#[test]
fn test_due_date_after_factor_rollover() {
    let bank = Bank::Bradesco(Bradesco {
        agency: n("1172"),
        account: n("403005"),
        wallet: n("6"),
        document_number: n("75896452"),
        ..Default::default()
    });
    let boleto = slip(bank, "2025-03-01", "100");
    assert_slip(
        &boleto,
        "23791100700000100001172060007589645204030050",
        "23791.17209 60007.589645 52040.300502 1 10070000010000",
    );

    let strict = BoletoConfig {
        expiration: ExpirationConfig {
            overflow: ExpirationOverflow::Reject,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        boleto.barcode(&strict),
        Err(BoletoError::ExpirationOutOfRange { .. })
    ));
}

#[test]
fn test_absent_amount_is_encoded_as_zeros() {
    let bank = Bank::Santander(Santander {
        assignee_code: n("0707077"),
        document_number: n("000001234567"),
        wallet: n("102"),
        ..Default::default()
    });
    let boleto = Boleto {
        amount: None,
        ..slip(bank, "2012-12-28", "0")
    };
    let barcode = boleto.barcode(&BoletoConfig::default()).unwrap();
    assert_eq!(barcode.amount_digits(), "0000000000");
    assert_eq!(barcode.expiration_factor(), "5561");
}

#[test]
fn test_records_load_from_json() {
    let boleto: Boleto = serde_json::from_str(
        r#"{
            "bank": {"kind": "caixa", "agency": "1333", "assignee_code": "792157",
                     "wallet": "14", "document_number": "946375189643625"},
            "amount": "2952.95",
            "due_date": "2015-03-16",
            "payee": {"name": "Empresa Exemplo Ltda"},
            "payer": {"name": "Fulano de Tal"}
        }"#,
    )
    .unwrap();

    let summary = boleto.summary(&BoletoConfig::default()).unwrap();
    assert_eq!(summary.bank_code, "104-0");
    assert_eq!(summary.wallet.as_deref(), Some("RG"));
    assert_eq!(summary.barcode, "10492636900002952957921578946137541896436250");
}

#[test]
fn test_bank_fields_reject_non_digits() {
    let err = serde_json::from_str::<Boleto>(
        r#"{"bank": {"kind": "caixa", "agency": "13-33"}}"#,
    );
    assert!(err.is_err());
}

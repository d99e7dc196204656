use crate::core::error::ContractError;
use crate::ledger::{LedgerEntry, LedgerReader};
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::Binary;

const ENTRY_SEPARATOR: &[u8] = b", ";

/// Lists every entry in the ledger as a json array of `{"Key": <key>, "Record": <record>}`
/// objects, in the order the ledger scan delivers them.  Each stored record is spliced into the
/// output verbatim as the nested `Record` value.  A failing scan step aborts the whole query.
///
/// # Parameters
///
/// * `ledger` The ledger to scan.
pub fn query_all_salmon<L: LedgerReader + ?Sized>(ledger: &L) -> AssetResult<Binary> {
    let mut buffer: Vec<u8> = vec![b'['];
    for (index, entry) in ledger.scan_all()?.enumerate() {
        if index > 0 {
            buffer.extend_from_slice(ENTRY_SEPARATOR);
        }
        write_entry(&mut buffer, &entry?)?;
    }
    buffer.push(b']');
    Binary::from(buffer).to_ok()
}

fn write_entry(buffer: &mut Vec<u8>, entry: &LedgerEntry) -> AssetResult<()> {
    // Keys are written as escaped json strings; record values are already json documents
    let key = serde_json_wasm::to_string(&entry.key)
        .map_err(|e| ContractError::ledger_read(&entry.key, e))?;
    buffer.extend_from_slice(b"{\"Key\": ");
    buffer.extend_from_slice(key.as_bytes());
    buffer.extend_from_slice(b", \"Record\": ");
    buffer.extend_from_slice(&entry.value);
    buffer.push(b'}');
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::types::salmon::Salmon;
    use crate::testutil::mock_ledger::MockLedger;

    use super::query_all_salmon;

    fn salmon_bytes(id: &str, holder: &str) -> Vec<u8> {
        Salmon::new(id, "Vessel", "2014-01-01", "Viet Nam", holder)
            .encode()
            .unwrap()
    }

    #[test]
    fn test_empty_ledger_is_an_empty_array() {
        let binary = query_all_salmon(&MockLedger::new()).expect("the scan should succeed");
        assert_eq!(b"[]".to_vec(), binary.to_vec());
    }

    #[test]
    fn test_single_entry_layout() {
        let ledger = MockLedger::new().with_entry("1", b"{\"holder\":\"A\"}".to_vec());
        let binary = query_all_salmon(&ledger).unwrap();
        assert_eq!(
            r#"[{"Key": "1", "Record": {"holder":"A"}}]"#,
            String::from_utf8(binary.to_vec()).unwrap(),
        );
    }

    #[test]
    fn test_entries_are_comma_separated_in_scan_order() {
        let ledger = MockLedger::new()
            .with_entry("1", b"{}".to_vec())
            .with_entry("2", b"[]".to_vec())
            .with_entry("3", b"7".to_vec());
        let binary = query_all_salmon(&ledger).unwrap();
        assert_eq!(
            r#"[{"Key": "1", "Record": {}}, {"Key": "2", "Record": []}, {"Key": "3", "Record": 7}]"#,
            String::from_utf8(binary.to_vec()).unwrap(),
        );
    }

    #[test]
    fn test_multiple_records_produce_a_valid_json_array() {
        let ledger = MockLedger::new()
            .with_entry("1", salmon_bytes("1", "Nha Hoang"))
            .with_entry("2", salmon_bytes("2", "Thanh Dong"));
        let binary = query_all_salmon(&ledger).unwrap();
        let parsed = serde_json_wasm::from_slice::<Vec<KeyedSalmon>>(binary.as_slice())
            .expect("the output should be a well formed json array");
        assert_eq!(2, parsed.len());
        assert_eq!("1", parsed[0].key);
        assert_eq!("Nha Hoang", parsed[0].record.holder);
        assert_eq!("2", parsed[1].key);
        assert_eq!("Thanh Dong", parsed[1].record.holder);
    }

    #[test]
    fn test_keys_are_escaped() {
        let ledger = MockLedger::new().with_entry("say \"hi\"", b"{}".to_vec());
        let binary = query_all_salmon(&ledger).unwrap();
        assert_eq!(
            r#"[{"Key": "say \"hi\"", "Record": {}}]"#,
            String::from_utf8(binary.to_vec()).unwrap(),
        );
    }

    #[test]
    fn test_scan_open_failure() {
        let error = query_all_salmon(&MockLedger::new().failing_scan_open()).unwrap_err();
        assert!(
            matches!(error, ContractError::LedgerScan { .. }),
            "expected a ledger scan error, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_scan_step_failure_discards_partial_output() {
        let ledger = MockLedger::new()
            .with_entry("1", salmon_bytes("1", "A"))
            .with_entry("2", salmon_bytes("2", "B"))
            .with_entry("3", salmon_bytes("3", "C"))
            .failing_scan_at(1);
        let error = query_all_salmon(&ledger).unwrap_err();
        match error {
            ContractError::LedgerRead { key, .. } => assert_eq!("2", key),
            _ => panic!("unexpected error encountered: {:?}", error),
        };
    }

    #[derive(serde::Deserialize)]
    struct KeyedSalmon {
        #[serde(rename = "Key")]
        key: String,
        #[serde(rename = "Record")]
        record: Salmon,
    }
}

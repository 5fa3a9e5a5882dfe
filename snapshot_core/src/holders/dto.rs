use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<HoldersData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HoldersData {
    #[serde(rename = "nftHolders", default)]
    pub nft_holders: Vec<HolderRecord>,
}

/// One wallet holding at least one token of the collection. Order and
/// uniqueness are whatever the indexer returned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolderRecord {
    pub address: String,
    #[serde(deserialize_with = "balance_as_string")]
    pub balance: String,
}

// The indexer encodes balances as JSON strings, but numbers have been seen
// on other deployments. Both decode to the string form we put in the CSV.
fn balance_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_and_numeric_balances() {
        let body = r#"{
            "data": {
                "nftHolders": [
                    { "address": "0x1", "balance": "5" },
                    { "address": "0x2", "balance": 3 }
                ]
            }
        }"#;

        let parsed: GraphQlResponse = serde_json::from_str(body).unwrap();
        let holders = parsed.data.unwrap().nft_holders;

        assert_eq!(
            holders,
            vec![
                HolderRecord {
                    address: "0x1".to_string(),
                    balance: "5".to_string(),
                },
                HolderRecord {
                    address: "0x2".to_string(),
                    balance: "3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_data_decodes_to_none() {
        let parsed: GraphQlResponse =
            serde_json::from_str(r#"{"errors":[{"message":"bad query"}]}"#).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn missing_holder_list_decodes_to_empty() {
        let parsed: GraphQlResponse = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(parsed.data.unwrap().nft_holders.is_empty());
    }
}

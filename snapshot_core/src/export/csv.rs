use crate::holders::dto::HolderRecord;

pub const CSV_HEADER: &str = "Wallet,Balance";

/// Render holders as CSV in response order, one `address,balance` row per
/// holder. Values go in verbatim, no quoting or escaping, no trailing
/// newline.
pub fn render_csv(holders: &[HolderRecord]) -> String {
    let mut out = String::from(CSV_HEADER);

    for holder in holders {
        out.push('\n');
        out.push_str(&holder.address);
        out.push(',');
        out.push_str(&holder.balance);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(address: &str, balance: &str) -> HolderRecord {
        HolderRecord {
            address: address.to_string(),
            balance: balance.to_string(),
        }
    }

    #[test]
    fn renders_header_and_one_row_per_holder() {
        let holders = vec![holder("0x1", "5"), holder("0x2", "3")];

        assert_eq!(render_csv(&holders), "Wallet,Balance\n0x1,5\n0x2,3");
    }

    #[test]
    fn line_count_is_holders_plus_header() {
        let holders: Vec<HolderRecord> = (0..7)
            .map(|i| holder(&format!("0x{i}"), &i.to_string()))
            .collect();

        let csv = render_csv(&holders);

        assert_eq!(csv.lines().count(), 8);
        for (i, line) in csv.lines().skip(1).enumerate() {
            assert_eq!(line, format!("0x{i},{i}"));
        }
    }

    #[test]
    fn no_holders_renders_header_only() {
        assert_eq!(render_csv(&[]), "Wallet,Balance");
    }
}

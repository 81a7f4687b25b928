use super::*;

fn prospect(id: &str, activity: Option<&str>) -> Prospect {
    Prospect {
        id: id.to_owned(),
        company_name: format!("Company {id}"),
        client_name: format!("Client {id}"),
        activity: activity.map(str::to_owned),
        ..Prospect::default()
    }
}

fn ids(prospects: &[Prospect]) -> Vec<&str> {
    prospects.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn hot_clients_skip_converted_and_cold() {
    let list = vec![
        prospect("a", Some("Converted")),
        prospect("b", Some("Follow Up")),
        prospect("c", Some("Cold")),
        prospect("d", None),
    ];
    assert_eq!(ids(&hot_clients(list)), ["b", "d"]);
}

#[test]
fn hot_clients_keep_backend_order_and_cap_at_five() {
    let list: Vec<Prospect> = (0..8).map(|i| prospect(&i.to_string(), Some("Talked"))).collect();
    assert_eq!(ids(&hot_clients(list)), ["0", "1", "2", "3", "4"]);
}

#[test]
fn hot_clients_of_empty_list_is_empty() {
    assert!(hot_clients(Vec::new()).is_empty());
}

#[test]
fn kpi_cards_format_currency_and_counts() {
    let summary = DashboardSummary {
        total_clients_data: 42,
        total_sales: 15000.0,
        last_month_payout: 1200.4,
        prospect_number: 7,
    };
    let cards = kpi_cards(&summary);
    assert_eq!(cards[0], ("Total Client's Data", "42".to_owned()));
    assert_eq!(cards[1], ("Total Sales", "Rs. 15000".to_owned()));
    assert_eq!(cards[2], ("Last Month Payout", "Rs. 1200".to_owned()));
    assert_eq!(cards[3], ("Prospect Number", "7".to_owned()));
}

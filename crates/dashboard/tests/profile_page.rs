use campaign::{Amount, Origin, UserProfile};
use dashboard::page::{Layout, ProfilePage};
use dashboard::source::{load_campaign, store_from_file};
use std::path::PathBuf;

fn demo_campaign() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/campaign.json")
}

#[test]
fn test_demo_campaign_loads() {
    let campaign = load_campaign(&demo_campaign()).unwrap();
    assert_eq!(campaign.identifier.as_str(), "1");
    assert_eq!(campaign.amount_donated, Amount::from(6600));
    assert_eq!(campaign.amount_required, Amount::from(10000));
}

#[test]
fn test_profile_page_from_file() {
    let store = store_from_file(Some(&demo_campaign())).unwrap();
    let origin = Origin::parse("https://fund.example.org").unwrap();
    let page = ProfilePage::build(
        store.current().as_ref(),
        &UserProfile::new("0xUser"),
        &origin,
        Layout::Wide,
        false,
    );

    let text = page.to_string();
    assert!(text.starts_with("[ Lending ] This feature is coming soon\n"));
    assert!(text.contains("Solar panels for the community clinic  66%"));
    assert!(text.contains("$6600 / $10000"));
    assert!(text.contains("https://fund.example.org/details/0xUser"));
    assert!(text.ends_with("<Claim Donation> (disabled)\n"));
}

#[test]
fn test_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("crowdfund-no-such-campaign.json");
    assert!(store_from_file(Some(&path)).is_err());
}

#[test]
fn test_malformed_amounts_still_render() {
    let path = std::env::temp_dir().join(format!("crowdfund-malformed-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"id":"2","description":"Broken","amountDonated":"abc","amountRequired":"0"}"#,
    )
    .unwrap();
    let store = store_from_file(Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    let origin = Origin::parse("http://localhost:3000").unwrap();
    let page = ProfilePage::build(
        store.current().as_ref(),
        &UserProfile::new("0xUser"),
        &origin,
        Layout::Compact,
        true,
    );
    let text = page.to_string();
    assert!(text.contains("Broken  N/A"));
    assert!(text.contains("N/A / $0"));
    assert!(text.ends_with("<Claim Donation> (disabled)\n"));
}

//! Integration tests for views built from YAML configuration

use ironview::prelude::*;
use serde_json::json;
use std::io::Write;

#[test]
fn test_blog_feed_from_config() {
    let yaml = r#"
page_size: 6
required: [title]
sort:
  field: date
  direction: desc
  pinned: featured
"#;
    let config = ViewConfig::from_yaml_str(yaml).unwrap();
    let mut view: ListView<Post> = ListView::from_config("post", &config);
    view.seed(Post::seed()).unwrap();

    let slice = view.visible();
    assert_eq!(slice.total_pages, 2);
    assert!(slice.items[0].featured);

    // The configured required rule is live
    let err = view.submit_create(json!({"excerpt": "no title"})).unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_ticket_queue_from_config_with_rank_table() {
    let yaml = r#"
page_size: 10
required: [subject]
sort:
  field: priority
  ranks: [Urgent, High, Medium, Low]
"#;
    let config = ViewConfig::from_yaml_str(yaml).unwrap();
    let mut view: ListView<Ticket> = ListView::from_config("ticket", &config);
    view.seed(Ticket::seed()).unwrap();

    let priorities: Vec<&str> = view
        .visible()
        .items
        .iter()
        .map(|t| t.priority.as_str())
        .collect();
    assert_eq!(priorities[0], "Urgent");
    assert_eq!(priorities[priorities.len() - 1], "Low");
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size: 4\nrequired: [name, email]").unwrap();

    let config = ViewConfig::from_yaml_file(file.path()).unwrap();
    let mut view: ListView<Member> = ListView::from_config("member", &config);
    view.seed(Member::seed()).unwrap();

    assert_eq!(view.visible().total_pages, 3);
    let err = view.submit_create(json!({"name": "Test User"})).unwrap_err();
    assert!(err.to_string().contains("email"));
}

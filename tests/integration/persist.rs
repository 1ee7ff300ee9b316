use std::fs;

use shoplist::core::persist::{load_list, save_list};

use crate::common::{build_context, make_temp_dir, run_desk, saved_list, write_valid_config};

#[test]
fn older_desk_files_with_detail_objects_load() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let legacy = r#"{
        "items": {
            "קמח": { "quantity": 2, "category": "אפייה", "price": 7.9 },
            "סוכר": 1
        },
        "categories": { "סוכר": "אפייה" }
    }"#;
    fs::write(dir.join("list.json"), legacy).unwrap();

    let output = run_desk(&dir, "total\nsave\nexit\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Total: 15.80 ₪"));

    let rewritten: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("list.json")).unwrap()).unwrap();
    assert_eq!(rewritten["items"]["קמח"], 2);
    assert_eq!(rewritten["categories"]["קמח"], "אפייה");
    assert_eq!(rewritten["prices"]["קמח"], 7.9);
}

#[test]
fn shared_file_keeps_insertion_order_and_plain_counts() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    ctx.list.add_item("עגבניות", 3, None, None).unwrap();
    ctx.list.add_item("אורז", 1, Some("יבשים"), None).unwrap();
    ctx.list.add_item("ביצים", 12, None, None).unwrap();
    ctx.save_list().unwrap();

    let text = fs::read_to_string(dir.join("list.json")).unwrap();
    let order: Vec<usize> = ["עגבניות", "אורז", "ביצים"]
        .iter()
        .map(|name| text.find(name).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "file: {text}");
    assert!(!text.contains("prices"), "empty price map should be omitted: {text}");

    let list = saved_list(&dir);
    let names: Vec<&str> = list.names().collect();
    assert_eq!(names, vec!["עגבניות", "אורז", "ביצים"]);
}

#[test]
fn load_command_accepts_a_saved_copy() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let mut copy = shoplist::core::models::ShoppingList::new();
    copy.add_item("תפוזים", 6, Some("פירות"), Some(1.5)).unwrap();
    let copy_path = dir.join("copy.json");
    save_list(&copy, &copy_path).unwrap();

    let input = format!("load \"{}\"\nexit\n", copy_path.display());
    let output = run_desk(&dir, &input);
    assert!(output.status.success());

    let list = load_list(&dir.join("list.json")).unwrap();
    let item = list.get("תפוזים").unwrap();
    assert_eq!(item.quantity, 6);
    assert_eq!(item.category.as_deref(), Some("פירות"));
    assert_eq!(item.price, Some(1.5));
}

#[test]
fn missing_list_file_reads_as_empty() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    assert!(!dir.join("list.json").exists());
    assert!(build_context(&dir).list.is_empty());
}

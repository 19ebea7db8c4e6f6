use rig_domain::part::{Part, PartsEnvelope};
use serde_json::json;

#[test]
fn decodes_backend_payload_and_ignores_unknown_fields() {
    let body = json!({
        "success": true,
        "count": 2,
        "data": [
            {
                "_id": "665f1c2e9b1d",
                "name": "AMD Ryzen 9 5900X",
                "category": "CPU",
                "price": 389.99,
                "stock": 12,
                "isSecondHand": false,
                "compatibility": { "socket": "AM4" },
                "imageUrl": "",
                "description": "12 cores, 24 threads",
                "createdAt": "2025-01-01T00:00:00.000Z"
            },
            { "name": "Used GTX 1080", "category": "GPU", "price": 150, "isSecondHand": true }
        ]
    });

    let envelope: PartsEnvelope = serde_json::from_value(body).expect("envelope decodes");
    assert_eq!(envelope.data.len(), 2);

    let cpu = &envelope.data[0];
    assert_eq!(cpu.name, "AMD Ryzen 9 5900X");
    assert!((cpu.stock - 12.0).abs() < f64::EPSILON);
    assert_eq!(cpu.description(), Some("12 cores, 24 threads"));

    let gpu = &envelope.data[1];
    assert!(gpu.second_hand);
    assert!(gpu.stock.abs() < f64::EPSILON);
    assert_eq!(gpu.description(), None);
    assert!((gpu.price - 150.0).abs() < f64::EPSILON);
}

#[test]
fn missing_data_key_is_an_empty_catalog() {
    let envelope: PartsEnvelope =
        serde_json::from_value(json!({ "success": false })).expect("envelope decodes");
    assert!(envelope.data.is_empty());
}

#[test]
fn serializes_camel_case() {
    let part = Part::new("Seasonic Focus GX-750", "Power Supply", 129.9).with_stock(4);
    let value = serde_json::to_value(&part).expect("part serializes");
    assert_eq!(value["isSecondHand"], json!(false));
    assert_eq!(value["stock"], json!(4.0));
    assert!(value.get("description").is_none());
}

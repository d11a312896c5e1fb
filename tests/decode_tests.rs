// Response decoding tests
// Author: kelexine (https://github.com/kelexine)

use kbeauty_analyzer::decode::{parse_analysis, strip_code_fence};
use kbeauty_analyzer::error::ErrorKind;
use proptest::prelude::*;
use serde_json::json;

fn sample_json() -> serde_json::Value {
    json!({
        "skinType": "combination",
        "analysis": "Oily T-zone, dry cheeks.",
        "concerns": [
            { "name": "Pores", "description": "Visible on the nose." },
            { "name": "Redness", "description": "Around the cheeks." }
        ],
        "recommendations": {
            "morningRoutine": ["Gentle cleanser", "Toner", "Moisturizer", "Sunscreen"],
            "eveningRoutine": ["Oil cleanser", "Foam cleanser", "Serum"],
            "productSuggestions": [
                { "type": "Centella Serum", "reason": "Calms redness." }
            ]
        }
    })
}

#[test]
fn test_decodes_field_for_field() {
    let result = parse_analysis(&sample_json().to_string()).unwrap();

    assert_eq!(result.skin_type, "combination");
    assert_eq!(result.analysis, "Oily T-zone, dry cheeks.");
    assert_eq!(result.concerns.len(), 2);
    assert_eq!(result.concerns[1].name, "Redness");
    assert_eq!(
        result.recommendations.morning_routine,
        vec!["Gentle cleanser", "Toner", "Moisturizer", "Sunscreen"]
    );
    assert_eq!(result.recommendations.product_suggestions[0].reason, "Calms redness.");

    // Re-serializing yields the input verbatim
    assert_eq!(serde_json::to_value(&result).unwrap(), sample_json());
}

#[test]
fn test_fenced_and_plain_decode_identically() {
    let plain = sample_json().to_string();
    let fenced = format!("```json\n{}\n```", plain);
    let pretty_fenced = format!("\n```JSON\n{}\n```\n", serde_json::to_string_pretty(&sample_json()).unwrap());

    let expected = parse_analysis(&plain).unwrap();
    assert_eq!(parse_analysis(&fenced).unwrap(), expected);
    assert_eq!(parse_analysis(&pretty_fenced).unwrap(), expected);
}

#[test]
fn test_truncated_json_is_decode_error() {
    let text = sample_json().to_string();
    let truncated = &text[..text.len() - 2];
    let err = parse_analysis(truncated).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_missing_nested_field_is_decode_error() {
    let mut value = sample_json();
    value["recommendations"]
        .as_object_mut()
        .unwrap()
        .remove("eveningRoutine");
    let err = parse_analysis(&value.to_string()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("eveningRoutine"));
}

#[test]
fn test_wrong_type_is_decode_error() {
    let mut value = sample_json();
    value["concerns"] = json!("none");
    assert_eq!(parse_analysis(&value.to_string()).unwrap_err().kind(), ErrorKind::Decode);
}

#[test]
fn test_blank_skin_type_is_decode_error() {
    let mut value = sample_json();
    value["skinType"] = json!("   ");
    let err = parse_analysis(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("skinType"));
}

#[test]
fn test_prose_is_decode_error() {
    let err = parse_analysis("I'm sorry, I can't analyze this image.").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

proptest! {
    #[test]
    fn prop_fence_stripping_is_transparent(
        skin_type in "[a-z]{1,12}",
        steps in proptest::collection::vec("[A-Za-z ]{1,20}", 0..6),
        tag in prop_oneof![Just(""), Just("json"), Just("JSON")],
    ) {
        let body = json!({
            "skinType": skin_type,
            "analysis": "text",
            "concerns": [],
            "recommendations": {
                "morningRoutine": steps.clone(),
                "eveningRoutine": steps,
                "productSuggestions": []
            }
        })
        .to_string();
        let fenced = format!("```{}\n{}\n```", tag, body);

        prop_assert_eq!(strip_code_fence(&fenced), body.as_str());
        prop_assert_eq!(parse_analysis(&fenced).unwrap(), parse_analysis(&body).unwrap());
    }
}

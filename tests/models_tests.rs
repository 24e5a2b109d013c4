use comments_summarizer::core::models::{SummaryResult, Tone, ToneRating, VideoId};

/// Tests for the result types handed to display surfaces.

#[test]
fn test_tone_wire_names() {
    let cases = [
        (Tone::Positive, "positive"),
        (Tone::QuitePositive, "quite positive"),
        (Tone::Neutral, "neutral"),
        (Tone::QuiteNegative, "quite negative"),
        (Tone::Negative, "negative"),
    ];

    for (tone, name) in cases {
        assert_eq!(tone.as_str(), name);
        assert_eq!(serde_json::to_string(&tone).unwrap(), format!("\"{name}\""));
        let parsed: Tone = serde_json::from_str(&format!("\"{name}\"")).unwrap();
        assert_eq!(parsed, tone);
    }
}

#[test]
fn test_video_id_rejects_blank() {
    assert!(VideoId::new("").is_err());
    assert!(VideoId::new("   ").is_err());
    assert_eq!(VideoId::new(" abc123 ").unwrap().as_str(), "abc123");
}

#[test]
fn test_success_serializes_as_tagged_object() {
    let result = SummaryResult::Success {
        summary_text: "Great video!".to_string(),
        tone_rating: Some(ToneRating {
            rating: Tone::Positive,
            reason: "Viewers loved it".to_string(),
        }),
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "type": "success",
            "summaryText": "Great video!",
            "toneRating": { "rating": "positive", "reason": "Viewers loved it" }
        })
    );
}

#[test]
fn test_absent_tone_rating_serializes_as_null() {
    let result = SummaryResult::Success {
        summary_text: "ok".to_string(),
        tone_rating: None,
    };
    let value = serde_json::to_value(&result).unwrap();
    assert!(value["toneRating"].is_null());
}

#[test]
fn test_failure_serializes_as_tagged_object() {
    let result = SummaryResult::Failure {
        message: "Service down".to_string(),
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "type": "failure", "message": "Service down" })
    );
}

#[test]
fn test_display_rendering() {
    let with_tone = SummaryResult::Success {
        summary_text: "People liked the editing.".to_string(),
        tone_rating: Some(ToneRating {
            rating: Tone::QuiteNegative,
            reason: "Complaints about audio".to_string(),
        }),
    };
    assert_eq!(
        with_tone.to_string(),
        "People liked the editing.\n\nTone: quite negative (Complaints about audio)"
    );

    let without_tone = SummaryResult::Success {
        summary_text: "Short summary".to_string(),
        tone_rating: None,
    };
    assert_eq!(without_tone.to_string(), "Short summary");

    let failure = SummaryResult::Failure {
        message: "HTTP 400: Bad Request".to_string(),
    };
    assert_eq!(failure.to_string(), "Error: HTTP 400: Bad Request");
}

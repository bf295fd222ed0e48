use kakaobot::errors::BotError;
use kakaobot::kakao::parsing::{
    first_image_url, parse_http_url, parse_secure_urls, parse_skill_request,
};
use serde_json::json;

fn skill_body(callback: Option<&str>, utterance: &str, params: serde_json::Value) -> String {
    let mut user_request = json!({ "utterance": utterance, "user": { "id": "u1" } });
    if let Some(cb) = callback {
        user_request["callbackUrl"] = json!(cb);
    }
    json!({
        "intent": { "id": "i1", "name": "block" },
        "userRequest": user_request,
        "bot": { "id": "b1", "name": "bot" },
        "action": { "name": "action", "params": params, "detailParams": {} }
    })
    .to_string()
}

#[test]
fn test_parse_question_request() {
    let body = skill_body(Some("https://bot-api.kakao.com/callback/xyz"), "오늘 날씨 어때?", json!({}));
    let request = parse_skill_request(&body).unwrap();

    assert_eq!(
        request.callback_url.as_str(),
        "https://bot-api.kakao.com/callback/xyz"
    );
    assert_eq!(request.utterance, "오늘 날씨 어때?");
    assert!(request.secure_image.is_none());
}

#[test]
fn test_missing_callback_url_is_rejected() {
    let body = skill_body(None, "hello", json!({}));
    let err = parse_skill_request(&body).unwrap_err();
    assert!(matches!(err, BotError::ParseError(_)));
    assert!(err.to_string().contains("callbackUrl"));

    let body = skill_body(Some("   "), "hello", json!({}));
    assert!(parse_skill_request(&body).is_err());
}

#[test]
fn test_invalid_callback_url_is_rejected() {
    let body = skill_body(Some("not a url"), "hello", json!({}));
    assert!(matches!(
        parse_skill_request(&body),
        Err(BotError::ParseError(_))
    ));

    let body = skill_body(Some("ftp://example.com/cb"), "hello", json!({}));
    assert!(parse_skill_request(&body).is_err());
}

#[test]
fn test_non_json_body_is_rejected() {
    assert!(matches!(
        parse_skill_request("userRequest=oops"),
        Err(BotError::ParseError(_))
    ));
    assert!(parse_skill_request(r#"{"action":{}}"#).is_err());
}

#[test]
fn test_secure_image_uses_first_url() {
    let secureimage = json!({
        "privacyAgreement": "Y",
        "imageQuantity": "2",
        "secureUrls": "List(https://img.example.com/a.jpg, https://img.example.com/b.jpg)",
        "expire": "2026-10-16T12:00:00"
    })
    .to_string();
    let body = skill_body(
        Some("https://bot-api.kakao.com/callback/xyz"),
        "",
        json!({ "secureimage": secureimage }),
    );

    let request = parse_skill_request(&body).unwrap();
    let raw = request.secure_image.unwrap();
    assert_eq!(
        first_image_url(&raw).unwrap().as_str(),
        "https://img.example.com/a.jpg"
    );
}

#[test]
fn test_unused_secure_image_param_does_not_fail_parsing() {
    for param in [json!(""), json!("garbage"), json!({ "secureUrls": "List()" })] {
        let body = skill_body(
            Some("https://bot-api.kakao.com/callback/xyz"),
            "안녕",
            json!({ "secureimage": param.clone() }),
        );
        let request = parse_skill_request(&body).unwrap();
        assert_eq!(request.utterance, "안녕");
        assert_eq!(request.secure_image, Some(param));
    }
}

#[test]
fn test_secure_urls_accepts_list_rendering_and_json_array() {
    let urls = parse_secure_urls(&json!("List(http://a.example/1.png)")).unwrap();
    assert_eq!(urls.len(), 1);

    let urls = parse_secure_urls(&json!(["http://a.example/1.png", "http://a.example/2.png"]))
        .unwrap();
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[1].as_str(), "http://a.example/2.png");

    let urls = parse_secure_urls(&json!(r#"["http://a.example/1.png"]"#)).unwrap();
    assert_eq!(urls[0].as_str(), "http://a.example/1.png");
}

#[test]
fn test_secure_urls_rejects_unknown_shapes() {
    assert!(parse_secure_urls(&json!("http://a.example/1.png")).is_err());
    assert!(parse_secure_urls(&json!(42)).is_err());
    assert!(parse_secure_urls(&json!([1, 2])).is_err());
    assert!(parse_secure_urls(&json!("List(not a url)")).is_err());
}

#[test]
fn test_empty_image_list_is_an_error() {
    let err = first_image_url(&json!(r#"{"secureUrls":"List()"}"#)).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_secure_image_without_urls_is_an_error() {
    assert!(first_image_url(&json!(r#"{"privacyAgreement":"Y"}"#)).is_err());
    assert!(first_image_url(&json!("garbage")).is_err());
    assert!(first_image_url(&json!(true)).is_err());
}

#[test]
fn test_secure_image_as_object() {
    let url = first_image_url(&json!({ "secureUrls": ["https://img.example.com/x.png"] })).unwrap();
    assert_eq!(url.as_str(), "https://img.example.com/x.png");
}

#[test]
fn test_parse_http_url_trims_and_checks_scheme() {
    assert_eq!(
        parse_http_url("  https://example.com/article  ").unwrap().as_str(),
        "https://example.com/article"
    );
    assert!(parse_http_url("javascript:alert(1)").is_err());
    assert!(parse_http_url("요약해줘").is_err());
}

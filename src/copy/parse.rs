//! @acp:module "Response Parser"
//! @acp:summary "Turn raw generation output into candidate copy items"
//! @acp:domain copy
//! @acp:layer service
//!
//! The service is asked for a fenced JSON array. When it answers with a
//! numbered list instead, the list format of each channel is recognised.
//! Anything else becomes a single full-text item holding the raw answer.

use std::sync::LazyLock;

use regex::Regex;

use super::GeneratedCopy;
use crate::guidelines::Channel;

/// Groups: 1=JSON body
static JSON_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap()
});

static NUMBERED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*").unwrap()
});

/// `1. Title: ... / Description: ...`
/// Groups: 1=title, 2=description
static HEADLINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:제목|title)\s*:\s*(.+?)\s*/\s*(?:설명|description)\s*:\s*(.+)").unwrap()
});

/// `1. Main: ... / Sub: ...`
/// Groups: 1=main, 2=sub
static BANNER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:메인|main(?:\s*text)?)\s*:\s*(.+?)\s*/\s*(?:서브|sub(?:\s*text)?)\s*:\s*(.+)")
        .unwrap()
});

/// @acp:summary "Parse a raw generation response for a channel"
pub fn parse_response(raw: &str, channel: Channel) -> Vec<GeneratedCopy> {
    if let Some(copies) = parse_json_block(raw) {
        return copies;
    }

    let copies: Vec<GeneratedCopy> = raw
        .lines()
        .map(str::trim)
        .filter(|line| NUMBERED_PATTERN.is_match(line))
        .filter_map(|line| parse_numbered_line(line, channel))
        .collect();

    if copies.is_empty() {
        tracing::debug!("Response has no recognised copy format, keeping raw text");
        return vec![GeneratedCopy::full_text(raw)];
    }
    copies
}

fn parse_json_block(raw: &str) -> Option<Vec<GeneratedCopy>> {
    let body = JSON_BLOCK_PATTERN.captures(raw)?.get(1)?.as_str();

    match serde_json::from_str::<Vec<GeneratedCopy>>(body) {
        Ok(copies) if !copies.is_empty() => Some(copies),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Fenced JSON block is not a copy list: {}", e);
            None
        }
    }
}

fn parse_numbered_line(line: &str, channel: Channel) -> Option<GeneratedCopy> {
    match channel {
        Channel::Naver => HEADLINE_PATTERN
            .captures(line)
            .map(|caps| GeneratedCopy::headline(caps[1].trim(), caps[2].trim())),
        Channel::Kakao => BANNER_PATTERN
            .captures(line)
            .map(|caps| GeneratedCopy::banner(caps[1].trim(), caps[2].trim())),
        Channel::Social | Channel::Landing => {
            let text = NUMBERED_PATTERN.replace(line, "");
            let text = text.trim();
            (!text.is_empty()).then(|| GeneratedCopy::full_text(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_json() {
        let raw = r#"Here you go:
```json
[
  { "title": "가을 신상", "description": "지금 확인하세요" },
  { "title": "봄 세일", "description": "한정 수량 특가" }
]
```"#;
        let copies = parse_response(raw, Channel::Naver);
        assert_eq!(copies.len(), 2);
        assert_eq!(copies[0].title.as_deref(), Some("가을 신상"));
        assert_eq!(copies[1].description.as_deref(), Some("한정 수량 특가"));
    }

    #[test]
    fn test_parse_landing_json_keeps_type() {
        let raw = "```json\n[{ \"type\": \"question\", \"fullText\": \"오늘 피부는 괜찮나요?\" }]\n```";
        let copies = parse_response(raw, Channel::Landing);
        assert_eq!(copies[0].kind.as_deref(), Some("question"));
        assert_eq!(copies[0].full_text.as_deref(), Some("오늘 피부는 괜찮나요?"));
    }

    #[test]
    fn test_parse_numbered_headlines() {
        let raw = "1. Title: Autumn drop / Description: New looks for cooler days\n\
                   2. 제목: 가을 신상 / 설명: 지금 바로 만나보세요\n\
                   3. something else";
        let copies = parse_response(raw, Channel::Naver);
        assert_eq!(
            copies,
            vec![
                GeneratedCopy::headline("Autumn drop", "New looks for cooler days"),
                GeneratedCopy::headline("가을 신상", "지금 바로 만나보세요"),
            ]
        );
    }

    #[test]
    fn test_parse_numbered_banners() {
        let raw = "1. 메인: 봄 신상 / 서브: 새로 나온 봄옷 보기";
        let copies = parse_response(raw, Channel::Kakao);
        assert_eq!(copies, vec![GeneratedCopy::banner("봄 신상", "새로 나온 봄옷 보기")]);
    }

    #[test]
    fn test_parse_numbered_full_text() {
        let raw = "1. First hook line\n2.   Second hook line\nnot numbered";
        let copies = parse_response(raw, Channel::Social);
        assert_eq!(
            copies,
            vec![
                GeneratedCopy::full_text("First hook line"),
                GeneratedCopy::full_text("Second hook line"),
            ]
        );
    }

    #[test]
    fn test_unrecognised_response_is_kept_whole() {
        let raw = "Sorry, I cannot help with that.";
        assert_eq!(parse_response(raw, Channel::Kakao), vec![GeneratedCopy::full_text(raw)]);
    }

    #[test]
    fn test_invalid_json_falls_back_to_lines() {
        let raw = "```json\n{ not json\n```\n1. Only hook";
        assert_eq!(
            parse_response(raw, Channel::Landing),
            vec![GeneratedCopy::full_text("Only hook")]
        );
    }
}

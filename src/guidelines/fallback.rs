//! @acp:module "Fallback Guidelines"
//! @acp:summary "Built-in per-channel constraint tables and resolution against extracted ones"
//! @acp:domain copy
//! @acp:layer config

use super::channel::Channel;
use super::extract::extract_constraints;
use super::types::{ConstraintSet, ConstraintSetBuilder, FieldKind, LengthBound};

/// Special characters rejected on the chat-app board
const KAKAO_SYMBOLS: &[&str] = &[
    "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "_", "+", "=", "{", "}", "[", "]", "|",
    "\\", ":", ";", "\"", "'", "<", ">", ",", ".", "?", "/",
];

/// @acp:summary "Hard-coded constraint table for a channel"
pub fn fallback_constraints(channel: Channel) -> ConstraintSet {
    match channel {
        Channel::Naver => ConstraintSet::builder()
            .range(FieldKind::Title, 1, 15)
            .range(FieldKind::Description, 20, 45)
            .prohibited([
                "1등", "최고", "최대", "최상", "절대", "완벽", "100%", "무료", "공짜", "혁신적",
                "혁명적", "세계 최초", "대박", "핫한", "인기폭발",
            ])
            .required(["업체명/브랜드명", "구체적 혜택"])
            .rules([
                "허위·과장 표현 금지",
                "구체적 수치 포함 권장",
                "키워드 자연스럽게 삽입",
                "임팩트 있는 단어 사용",
            ])
            .build(),
        Channel::Kakao => ConstraintSet::builder()
            .max(FieldKind::Main, 13)
            .max(FieldKind::Sub, 17)
            .prohibited(KAKAO_SYMBOLS.iter().copied())
            .prohibited(["최고", "1등", "대박", "혁신"])
            .required(["브랜드 표기"])
            .rules([
                "특수문자 사용 금지",
                "메인과 서브 내용 달라야 함",
                "이미지와 텍스트 겹침 주의",
                "간결하고 명확하게",
            ])
            .build(),
        Channel::Social => ConstraintSet::builder()
            .range(FieldKind::Full, 70, 90)
            .prohibited(["클릭베이트성 과장 표현"])
            .required(["공감 요소", "행동 유도", "주목성"])
            .rules([
                "첫 문장이 가장 중요",
                "구체적 수치나 감정 자극",
                "명확한 CTA 포함",
                "타겟의 관심사 반영",
            ])
            .build(),
        Channel::Landing => ConstraintSet::builder()
            .range(FieldKind::Full, 60, 100)
            .required(["후킹 요소"])
            .rules([
                "강력한 첫인상",
                "문제 해결 중심",
                "감정적 어필",
                "구체적 혜택 제시",
            ])
            .build(),
    }
}

/// @acp:summary "Constraints for a request: extracted where possible, fallback elsewhere"
///
/// Without instruction text the channel table is used as is. Otherwise each
/// missing end of a field bound, and each list that came back empty, is taken
/// from the channel table.
pub fn resolve_constraints(channel: Channel, instructions: Option<&str>) -> ConstraintSet {
    let fallback = fallback_constraints(channel);

    let Some(text) = instructions.filter(|text| !text.trim().is_empty()) else {
        tracing::debug!("No instructions for {}, using built-in guidelines", channel);
        return fallback;
    };

    fill_from(extract_constraints(text), &fallback)
}

fn fill_from(extracted: ConstraintSet, fallback: &ConstraintSet) -> ConstraintSet {
    let filled: Vec<(FieldKind, LengthBound)> = FieldKind::ALL
        .into_iter()
        .filter_map(|field| {
            let written = extracted.bound(field);
            let bound = written.filled_from(fallback.bound(field));
            (bound != written).then(|| {
                tracing::debug!("Completed {} bound from built-in table: {}", field, bound);
                (field, bound)
            })
        })
        .collect();

    let mut builder = ConstraintSetBuilder::from(extracted);
    for (field, bound) in filled {
        builder = builder.bound(field, bound);
    }
    if !builder.has_prohibited_terms() {
        builder = builder.prohibited(fallback.prohibited_terms().iter().cloned());
    }
    if !builder.has_required_elements() {
        builder = builder.required(fallback.required_elements().iter().cloned());
    }
    if !builder.has_special_rules() {
        builder = builder.rules(fallback.special_rules().iter().cloned());
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naver_table() {
        let set = fallback_constraints(Channel::Naver);
        assert_eq!(set.bound(FieldKind::Title), LengthBound::range(1, 15));
        assert_eq!(set.bound(FieldKind::Description), LengthBound::range(20, 45));
        assert_eq!(set.prohibited_terms().len(), 15);
        assert!(set.bound(FieldKind::Full).is_empty());
    }

    #[test]
    fn test_kakao_table() {
        let set = fallback_constraints(Channel::Kakao);
        assert_eq!(set.bound(FieldKind::Main), LengthBound::max(13));
        assert_eq!(set.bound(FieldKind::Sub), LengthBound::max(17));
        assert!(set.prohibited_terms().iter().any(|t| t == "\\"));
        assert!(set.prohibited_terms().iter().any(|t| t == "혁신"));
    }

    #[test]
    fn test_full_text_tables() {
        assert_eq!(
            fallback_constraints(Channel::Social).bound(FieldKind::Full),
            LengthBound::range(70, 90)
        );
        let landing = fallback_constraints(Channel::Landing);
        assert_eq!(landing.bound(FieldKind::Full), LengthBound::range(60, 100));
        assert!(landing.prohibited_terms().is_empty());
    }

    #[test]
    fn test_resolve_without_instructions() {
        assert_eq!(
            resolve_constraints(Channel::Kakao, None),
            fallback_constraints(Channel::Kakao)
        );
        assert_eq!(
            resolve_constraints(Channel::Kakao, Some("  \n")),
            fallback_constraints(Channel::Kakao)
        );
    }

    #[test]
    fn test_resolve_prefers_extracted_bounds() {
        let text = "### Conditions\n- Title: 5-20 characters\n- Prohibited: 'cheap'";
        let set = resolve_constraints(Channel::Naver, Some(text));

        assert_eq!(set.bound(FieldKind::Title), LengthBound::range(5, 20));
        assert_eq!(set.bound(FieldKind::Description), LengthBound::range(20, 45));
        assert_eq!(set.prohibited_terms(), ["cheap"]);
        assert_eq!(set.required_elements(), ["업체명/브랜드명", "구체적 혜택"]);
    }

    #[test]
    fn test_resolve_without_section_matches_fallback() {
        let set = resolve_constraints(Channel::Social, Some("Write something catchy."));
        assert_eq!(set, fallback_constraints(Channel::Social));
    }

    const SOCIAL_CONDITIONS: &str = "###조건
- **fullText**: 공백 포함 **70 – 90자**
- 금지어: '무료', '공짜', '100%', '최고', '최대', '완전', '절대' 등 과장 표현과 특수문자
- 감정적 어필 + 합리적 근거의 균형 유지

###광고목적
";

    const LANDING_CONDITIONS: &str = "###조건
- **fullText**: 공백 포함 **60 – 100자**
- 금지어: '무료', '공짜', '100%', '최고', '최대', '완전', '절대' 등 과장 표현·특수문자
- 가치 제안·CTA·페인 해결 요소를 한 문장 안에 포함
";

    #[test]
    fn test_full_text_minimum_survives_resolution() {
        let social = resolve_constraints(Channel::Social, Some(SOCIAL_CONDITIONS));
        assert_eq!(social.bound(FieldKind::Full), LengthBound::range(70, 90));
        assert!(social.prohibited_terms().iter().any(|t| t == "무료"));

        let verdict = crate::guidelines::validate(&"가".repeat(10), FieldKind::Full, &social);
        assert_eq!(
            verdict.errors,
            vec!["Text is under the minimum of 70 characters (current: 10)"]
        );

        let landing = resolve_constraints(Channel::Landing, Some(LANDING_CONDITIONS));
        assert_eq!(landing.bound(FieldKind::Full), LengthBound::range(60, 100));
    }

    #[test]
    fn test_table_minimum_never_inverts_written_maximum() {
        let text = "### Conditions\n- Full text: 50 characters";
        let set = resolve_constraints(Channel::Landing, Some(text));
        assert_eq!(set.bound(FieldKind::Full), LengthBound::max(50));
    }
}

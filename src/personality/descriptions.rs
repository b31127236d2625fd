//! Display copy for the sixteen complete types.

use serde::Serialize;

/// Title, tags and blurb shown with a finished result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDescription {
    pub label: &'static str,
    pub title: &'static str,
    pub hashtags: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub summary: &'static str,
}

const DESCRIPTIONS: &[TypeDescription] = &[
    TypeDescription {
        label: "ISTJ",
        title: "청렴결백한 논리주의자",
        hashtags: &["#원칙주의", "#책임감"],
        keywords: &["Responsible", "Organized", "Practical", "Detail-oriented", "Reliable"],
        summary: "약속 시간 10분 전에 도착해 있는 믿음직한 사람이에요.",
    },
    TypeDescription {
        label: "ISFJ",
        title: "용감한 수호자",
        hashtags: &["#배려왕", "#든든함"],
        keywords: &["Caring", "Loyal", "Practical", "Detail-oriented", "Supportive"],
        summary: "주변 사람의 작은 변화도 먼저 알아채는 다정한 수호자예요.",
    },
    TypeDescription {
        label: "INFJ",
        title: "선의의 옹호자",
        hashtags: &["#통찰력", "#이상주의"],
        keywords: &["Insightful", "Idealistic", "Compassionate", "Creative", "Purposeful"],
        summary: "말하지 않아도 마음을 읽어내는 깊은 눈을 가졌어요.",
    },
    TypeDescription {
        label: "INTJ",
        title: "용의주도한 전략가",
        hashtags: &["#전략가", "#독립적"],
        keywords: &["Strategic thinker", "Independent", "Analytical", "Innovative", "Future-focused"],
        summary: "10년 뒤 계획까지 이미 세워둔 냉철한 설계자군요!",
    },
    TypeDescription {
        label: "ISTP",
        title: "만능 재주꾼",
        hashtags: &["#냉철함", "#해결사"],
        keywords: &["Practical", "Hands-on", "Logical", "Adaptable", "Problem solver"],
        summary: "사고 현장에서도 수리비부터 계산할 쿨한 해결사군요!",
    },
    TypeDescription {
        label: "ISFP",
        title: "호기심 많은 예술가",
        hashtags: &["#감성", "#자유로움"],
        keywords: &["Artistic", "Gentle", "Flexible", "Sensitive", "Present-focused"],
        summary: "오늘의 하늘 색깔까지 기억하는 섬세한 예술가예요.",
    },
    TypeDescription {
        label: "INFP",
        title: "열정적인 중재자",
        hashtags: &["#몽상가", "#공감왕"],
        keywords: &["Idealistic", "Empathetic", "Creative", "Open-minded", "Value-driven"],
        summary: "머릿속에 나만의 세계를 하나쯤 품고 사는 낭만가예요.",
    },
    TypeDescription {
        label: "INTP",
        title: "논리적인 사색가",
        hashtags: &["#호기심", "#분석가"],
        keywords: &["Logical", "Curious", "Theoretical", "Problem solver", "Analytical"],
        summary: "궁금한 게 생기면 새벽까지 파고드는 탐구가예요.",
    },
    TypeDescription {
        label: "ESTP",
        title: "모험을 즐기는 사업가",
        hashtags: &["#행동파", "#승부사"],
        keywords: &["Energetic", "Action-oriented", "Pragmatic", "Sociable", "Risk-taker"],
        summary: "생각보다 몸이 먼저 움직이는 현장형 해결사예요.",
    },
    TypeDescription {
        label: "ESFP",
        title: "자유로운 영혼의 연예인",
        hashtags: &["#분위기메이커", "#흥부자"],
        keywords: &["Outgoing", "Spontaneous", "Playful", "Enthusiastic", "People-focused"],
        summary: "어디서든 자리를 밝히는 타고난 분위기 메이커예요.",
    },
    TypeDescription {
        label: "ENFP",
        title: "재기발랄한 활동가",
        hashtags: &["#에너지", "#인싸"],
        keywords: &["Enthusiastic", "Creative", "Sociable", "Spontaneous", "Optimistic"],
        summary: "세상을 즐거움으로 채우는 당신은 자유로운 영혼입니다!",
    },
    TypeDescription {
        label: "ENTP",
        title: "논쟁을 즐기는 변론가",
        hashtags: &["#아이디어뱅크", "#토론왕"],
        keywords: &["Innovative", "Entrepreneurial", "Debater", "Quick thinker", "Versatile"],
        summary: "새로운 아이디어로 판을 뒤집는 걸 즐기는 발명가예요.",
    },
    TypeDescription {
        label: "ESTJ",
        title: "엄격한 관리자",
        hashtags: &["#리더십", "#현실주의"],
        keywords: &["Organized", "Practical", "Direct", "Efficient", "Traditional"],
        summary: "모임 총무는 늘 당신 몫, 체계적인 리더예요.",
    },
    TypeDescription {
        label: "ESFJ",
        title: "사교적인 외교관",
        hashtags: &["#친화력", "#다정함"],
        keywords: &["Caring", "Social", "Organized", "Cooperative", "Supportive"],
        summary: "모두의 생일을 기억하는 따뜻한 연결고리예요.",
    },
    TypeDescription {
        label: "ENFJ",
        title: "정의로운 사회운동가",
        hashtags: &["#카리스마", "#공감리더"],
        keywords: &["Charismatic", "Inspiring", "Empathetic", "Organized", "Persuasive"],
        summary: "사람들의 가능성을 먼저 믿어주는 든든한 리더예요.",
    },
    TypeDescription {
        label: "ENTJ",
        title: "대담한 통솔자",
        hashtags: &["#추진력", "#목표지향"],
        keywords: &["Natural leader", "Strategic", "Decisive", "Efficient", "Goal-oriented"],
        summary: "목표가 생기면 끝까지 밀어붙이는 타고난 지휘관이에요.",
    },
];

/// Look up the description of a complete four-letter type
///
/// Labels still containing a placeholder, or otherwise unknown, give `None`.
pub fn describe(label: &str) -> Option<&'static TypeDescription> {
    let label = label.trim();
    DESCRIPTIONS
        .iter()
        .find(|d| d.label.eq_ignore_ascii_case(label))
}

/// Every known description, in table order
pub fn all() -> &'static [TypeDescription] {
    DESCRIPTIONS
}

//! Built-in Korean lexicon.
//!
//! Each entry is a raw substring and its weight. Single-syllable fragments
//! (e.g. "놀", "본", "울") also match inside longer words.

/// E: people, gatherings, going out
pub(super) const EXTRAVERSION: &[(&str, u32)] = &[
    ("같이", 5), ("사람", 3), ("모임", 5), ("떠들", 3),
    ("만나", 4), ("친구들", 5), ("다같이", 5), ("여럿이", 5),
    ("파티", 4), ("술자리", 4), ("회식", 4), ("번개", 5),
    ("나가", 3), ("밖에", 3), ("외출", 3), ("약속", 4),
    ("만남", 4), ("대화", 3), ("수다", 5), ("톡", 3),
    ("전화", 3), ("연락", 3), ("놀", 4), ("함께", 4),
    ("우리", 3), ("다들", 3), ("활발", 4), ("시끌", 4),
    ("왁자지껄", 5), ("떠들썩", 5),
];

/// I: solitude, rest, staying in
pub(super) const INTROVERSION: &[(&str, u32)] = &[
    ("혼자", 5), ("조용", 4), ("집에", 5), ("생각", 3),
    ("기빨려", 5), ("이어폰", 4), ("집콕", 5), ("방콕", 5),
    ("쉬고", 3), ("충전", 4), ("휴식", 3), ("피곤", 4),
    ("귀찮", 4), ("나만", 4), ("혼자만", 5), ("고요", 4),
    ("조용히", 4), ("차분", 4), ("은둔", 5), ("방구석", 5),
    ("침대", 3), ("집순이", 5), ("집돌이", 5), ("인싸 아닌", 5),
    ("조용한", 4), ("깊이", 3), ("내면", 4), ("사색", 4),
    ("명상", 4), ("독서", 3),
];

/// S: facts, experience, the concrete present
pub(super) const SENSING: &[(&str, u32)] = &[
    ("사실", 5), ("현실", 4), ("경험", 4), ("직접", 3),
    ("구체적", 5), ("팩트", 3), ("실제로", 4), ("본", 3),
    ("들은", 3), ("해봤", 4), ("겪은", 4), ("당장", 4),
    ("지금", 3), ("현재", 3), ("실질적", 5), ("실용적", 5),
    ("효율적", 4), ("구체적으로", 5), ("정확히", 4), ("확실히", 4),
    ("분명히", 4), ("증거", 4), ("데이터", 4), ("통계", 4),
    ("실전", 4), ("실생활", 4), ("실무", 4), ("현장", 4),
    ("실체", 4), ("명확", 4), ("세부", 4), ("디테일", 4),
    ("눈에 보이는", 5), ("만져본", 4), ("경험상", 5), ("과거에", 3),
];

/// N: meaning, imagination, possibilities
pub(super) const INTUITION: &[(&str, u32)] = &[
    ("의미", 5), ("상상", 5), ("미래", 4), ("가능성", 5),
    ("만약에", 5), ("비유", 3), ("추상", 4), ("이론", 4),
    ("개념", 4), ("아이디어", 5), ("영감", 5), ("직관", 4),
    ("느낌", 3), ("뭔가", 3), ("어쩌면", 4), ("나중에", 3),
    ("언젠가", 4), ("결국", 3), ("본질", 5), ("심층", 4),
    ("근본", 4), ("철학", 5), ("깊은", 4), ("숨은", 4),
    ("패턴", 4), ("연결", 4), ("관계", 3), ("상징", 4),
    ("은유", 4), ("창의", 5), ("혁신", 5), ("비전", 5),
    ("꿈", 4), ("이상", 4), ("통찰", 5), ("해석", 4),
    ("암시", 4), ("함의", 5), ("새로운", 4),
];

/// T: reasons, logic, blunt evaluation
pub(super) const THINKING: &[(&str, u32)] = &[
    ("이유", 5), ("원인", 5), ("논리", 5), ("분석", 4),
    ("왜", 5), ("해결", 4), ("보험", 5), ("합리", 5),
    ("효율", 4), ("객관", 5), ("판단", 4), ("평가", 4),
    ("기준", 4), ("정확", 4), ("사실", 3), ("증명", 4),
    ("근거", 5), ("타당", 5), ("논증", 5), ("결론", 4),
    ("추론", 4), ("인과", 5), ("체계", 4), ("구조", 4),
    ("시스템", 4), ("방법", 3), ("전략", 4), ("계획적", 4),
    ("냉정", 5), ("냉철", 5), ("이성", 5), ("실리", 4),
    ("득실", 5), ("손익", 5), ("따져", 5), ("계산", 4),
    ("어떻게", 4), ("방식", 3), ("수단", 4), ("절차", 4),
    ("규칙", 4), ("원리", 4), ("법칙", 4), ("솔직히", 3),
    ("어이없", 4), ("황당", 4), ("뭔말", 3), ("당연", 4),
    ("아니지", 3), ("팩폭", 5), ("직설", 5), ("퍽이나", 4),
    ("웃기", 3), ("말도안", 4), ("대신", 3), ("해주", 3),
    ("개선", 5), ("수정", 4), ("육하원칙", 5), ("따라", 3),
    ("비효율", 5), ("최적", 5), ("다르지않", 4), ("에따라", 3),
];

/// F: emotions, empathy, comfort
pub(super) const FEELING: &[(&str, u32)] = &[
    ("기분", 5), ("마음", 5), ("공감", 5), ("서운", 4),
    ("감정", 5), ("속상", 5), ("어떡해", 5), ("느낌", 4),
    ("감성", 5), ("정서", 4), ("위로", 5), ("힐링", 5),
    ("따뜻", 4), ("배려", 5), ("존중", 4), ("이해", 4),
    ("고민", 4), ("걱정", 4), ("불안", 4), ("슬픔", 4),
    ("기쁨", 3), ("행복", 3), ("사랑", 4), ("좋아", 3),
    ("싫어", 3), ("화나", 4), ("짜증", 4), ("답답", 4),
    ("억울", 5), ("미안", 4), ("고마", 4), ("감동", 5),
    ("눈물", 5), ("울", 4), ("아픔", 4), ("상처", 5),
    ("치유", 5), ("마음이", 5), ("가슴", 4), ("심정", 5),
    ("감정적", 5), ("인간적", 5), ("따뜻한", 5), ("공감해", 5),
    ("위로해", 5), ("힘들", 4), ("안쓰러", 5), ("불쌍", 4),
    ("측은", 5), ("기뻐", 4), ("진심", 4), ("우울", 5),
    ("힘내", 5), ("괜찮", 4), ("응원", 5), ("착하", 3),
];

/// J: plans, schedules, closure
pub(super) const JUDGING: &[(&str, u32)] = &[
    ("계획", 5), ("정리", 4), ("미리", 5), ("확정", 4),
    ("리스트", 5), ("예약", 4), ("스케줄", 5), ("일정", 5),
    ("체크", 4), ("준비", 4), ("사전", 4), ("미리미리", 5),
    ("예정", 4), ("정해", 4), ("결정", 4), ("확실", 4),
    ("정확", 3), ("명확", 3), ("체계", 4), ("순서", 4),
    ("단계", 4), ("규칙", 4), ("원칙", 4), ("기준", 3),
    ("정돈", 4), ("정렬", 4), ("분류", 4), ("마감", 4),
    ("데드라인", 5), ("기한", 4), ("시간 맞춰", 5), ("약속 시간", 5),
    ("정시", 4), ("체크리스트", 5), ("투두", 5), ("할 일", 4),
    ("완료", 3), ("마무리", 4), ("끝내", 3), ("깔끔", 4),
    ("정확히", 4), ("틀림없이", 4),
];

/// P: improvisation, flexibility, going with the flow
pub(super) const PERCEIVING: &[(&str, u32)] = &[
    ("즉흥", 5), ("그때", 4), ("유연", 4), ("대충", 4),
    ("일단", 5), ("상황 봐서", 4), ("나중에", 4), ("천천히", 3),
    ("여유", 4), ("자유", 4), ("편한", 3), ("느긋", 4),
    ("막", 4), ("아무", 3), ("뭐든", 4), ("그냥", 3),
    ("그렇게", 2), ("알아서", 4), ("흐름", 4), ("타이밍", 4),
    ("순간", 3), ("융통", 5), ("임기응변", 5), ("애드립", 5),
    ("변화", 3), ("적응", 4), ("조절", 3), ("바꿔", 3),
    ("다시", 2), ("또", 2), ("나중", 4), ("미루", 5),
    ("일단은", 5), ("가다가", 4), ("보면서", 4), ("지금은", 3),
    ("당장", 3), ("급하게", 3), ("여유롭게", 4), ("막상", 4),
    ("생각나면", 4), ("끌리면", 4), ("하고 싶을 때", 5), ("기분 내킬 때", 5),
];

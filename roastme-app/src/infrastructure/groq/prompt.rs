use crate::domain::{Language, LanguageTag, RoastLevel, RoastPrompt, RoastRequest, Script};

const SOFT_SYSTEM: &str = "You are a friendly comedian who gently teases people.
- Use playful, lighthearted humor
- Keep it wholesome but still funny
- Like a friend who lovingly makes fun of you
- Use mild sarcasm and clever wordplay
- Make them chuckle, not cry";

const MEDIUM_SYSTEM: &str = "You are a stand-up comedian known for bold, sarcastic roasts.
- Be witty and cutting but not cruel
- Use sharp observations and clever burns
- Reference their flaws creatively
- Make it sting a little but in a fun way
- Like a roast battle with some heat";

const BRUTAL_SYSTEM: &str = "You are a SAVAGE roast master with NO MERCY.
- Go ABSOLUTELY BRUTAL - make them question their life choices
- Attack their profession, dreams, and everything they told you
- Use dark humor, devastating burns, and savage observations
- Make it so harsh they might need therapy after
- Be creative with insults - hit where it hurts
- Reference their \"about\" section to make it deeply personal
- Make them feel called out on a spiritual level
- Like a verbal destruction with no survivors
- BUT NEVER use slurs, hate speech, or genuinely harmful content";

const MARATHI_DEVANAGARI: &str = "IMPORTANT: The user has written in Marathi (Devanagari script).
You MUST respond entirely in Marathi using Devanagari script (मराठी).
Use authentic Marathi phrases, slang, and expressions for the roast.
Example: \"अरे बाबा\", \"काय रे\", \"भावा\", \"मग काय\"";

const MARATHI_LATIN: &str = "IMPORTANT: The user has written in Marathi using English letters (transliterated).
You MUST respond in Marathi but written in English letters (Roman Marathi/Romanized Marathi).
Use authentic Marathi phrases and slang written in English.
Example: \"Arre baba\", \"Kay re\", \"Bhava\", \"Mag kay\", \"Kiti bore aahe\"";

const HINDI_DEVANAGARI: &str = "IMPORTANT: The user has written in Hindi (Devanagari script).
You MUST respond entirely in Hindi using Devanagari script (हिंदी).
Use authentic Hindi phrases, slang, and expressions for the roast.
Example: \"अरे भाई\", \"क्या बात है\", \"बंदे\", \"भइया\"";

const HINDI_LATIN: &str = "IMPORTANT: The user has written in Hindi using English letters (transliterated).
You MUST respond in Hindi but written in English letters (Hinglish/Romanized Hindi).
Use authentic Hindi phrases and slang written in English.
Example: \"Arre bhai\", \"Kya baat hai\", \"Bande\", \"Bhaiya\", \"Kitna boring hai\"";

const ENGLISH: &str = "Respond in English with modern, relatable humor.";

pub fn system_template(level: RoastLevel) -> &'static str {
    match level {
        RoastLevel::Soft => SOFT_SYSTEM,
        RoastLevel::Medium => MEDIUM_SYSTEM,
        RoastLevel::Brutal => BRUTAL_SYSTEM,
    }
}

pub fn language_instruction(tag: LanguageTag) -> &'static str {
    match (tag.language, tag.script) {
        (Language::Marathi, Script::Devanagari) => MARATHI_DEVANAGARI,
        (Language::Marathi, Script::Latin) => MARATHI_LATIN,
        (Language::Hindi, Script::Devanagari) => HINDI_DEVANAGARI,
        (Language::Hindi, Script::Latin) => HINDI_LATIN,
        (Language::English, _) => ENGLISH,
    }
}

fn tone_line(level: RoastLevel) -> &'static str {
    match level {
        RoastLevel::Soft => "Keep it playful and fun",
        RoastLevel::Medium => "Be bold and sarcastic",
        RoastLevel::Brutal => "Be absolutely SAVAGE and RUTHLESS",
    }
}

pub fn build_roast_prompt(request: &RoastRequest, tag: LanguageTag) -> RoastPrompt {
    let about = if request.about.is_empty() {
        "No additional info provided"
    } else {
        request.about.as_str()
    };

    let user = format!(
        r#"Roast this person based on the following info:

Name: {name}
Profession: {profession}
About them: {about}
Roast Level: {level}

{language}

Instructions:
- Write 4-6 lines of roast
- Make it personal using the info provided
- {tone}
- Use humor and references appropriate to the detected language
- Each line should be a separate burn
- End with a devastating closer
- DO NOT include any disclaimers or apologies
- DO NOT break character
- STRICTLY follow the language instruction above"#,
        name = request.name,
        profession = request.profession,
        about = about,
        level = request.level.label(),
        language = language_instruction(tag),
        tone = tone_line(request.level),
    );

    RoastPrompt {
        level: request.level,
        system: system_template(request.level).to_string(),
        user,
    }
}

use super::brief::Brief;
use super::duration::SpotDuration;

/// Stock lines used to pad a spot that comes up short, in the order they are tried
const FILLER_LINES: [&str; 5] = [
    "And if you’re tired of the same old, this is your switch-up.",
    "It’s fast, it’s easy, and it hits the spot.",
    "You’ll know you’re in the right place the second you walk in.",
    "Bring a friend. Or don’t. Either way — you’re winning.",
    "This is the part where you stop thinking and start going.",
];

const MUST_SAY_PREFIX: &str = "MUST-SAY:";

/// Build a draft script and fit it to the spot length
pub fn assemble(duration: SpotDuration, brief: &Brief) -> String {
    let script = build_script(duration, brief);
    pad_to_duration(&script, duration)
}

/// Lay out the spot from the brief
///
/// Missing brand, offer, audience and CTA show up as bracketed placeholders
/// so the writer can see what the brief was missing.
pub fn build_script(duration: SpotDuration, brief: &Brief) -> String {
    let brand = or_placeholder(&brief.brand, "[BRAND]");
    let offer = or_placeholder(&brief.offer, "[OFFER]");
    let audience = or_placeholder(&brief.audience, "[AUDIENCE]");
    let cta = or_placeholder(&brief.cta, "[CTA]");

    let mut lines = vec![
        format!(":{} RADIO COPY", duration.seconds()),
        format!("TONE: {}", brief.tone),
    ];

    let hook = match (brief.offer.is_empty(), brief.audience.is_empty()) {
        (false, false) => format!("HOOK: {} — built for {}.", offer, audience),
        (false, true) => format!("HOOK: {}. Right now.", offer),
        _ => "HOOK: Quick heads-up — this is worth your next stop.".to_string(),
    };
    lines.push(hook);

    if duration == SpotDuration::Fifteen {
        lines.push(format!("{}. {}. Simple.", brand, offer));
        lines.push(format!("Perfect for {}.", audience));
    } else {
        lines.push(format!("{} makes it easy: {}.", brand, offer));
        lines.push(format!("If you’re {}, this is your move.", audience));
        lines.push("Real talk: you want something that works without the runaround.".to_string());
    }

    if brief.details.is_empty() {
        lines.push("DETAILS: Ask for today’s special, and don’t overthink it — just go.".to_string());
    } else {
        lines.push(format!("DETAILS: {}", brief.details));
    }

    if duration == SpotDuration::Sixty {
        lines.push(
            "BEAT TWO: Picture it — you walk in, you know exactly what to order, and you’re smiling before the first bite."
                .to_string(),
        );
        lines.push("PROOF: It’s the kind of place you bring people back to.".to_string());
    }

    lines.push(format!("CTA: {}.", cta));
    lines.push(format!("{}.", brand));

    if !brief.must_say.is_empty() {
        lines.push(format!("{} {}", MUST_SAY_PREFIX, brief.must_say));
    }

    join_clean(&lines)
}

/// Fit a script to the word budget of the spot
///
/// Short scripts get stock filler lines appended until they reach the
/// minimum or the fillers run out. Long scripts lose their filler lines
/// first, then trailing lines, but never a MUST-SAY line.
pub fn pad_to_duration(script: &str, duration: SpotDuration) -> String {
    let targets = duration.word_targets();
    let mut out = script.to_string();

    for filler in FILLER_LINES {
        if word_count(&out) >= targets.min {
            break;
        }
        out = join_clean(&[out.as_str(), filler]);
    }

    if word_count(&out) <= targets.max {
        return out;
    }

    let all_lines: Vec<&str> = out.lines().collect();
    let mut lines: Vec<&str> = all_lines
        .iter()
        .copied()
        .filter(|line| !FILLER_LINES.contains(&line.trim()))
        .collect();
    if lines.is_empty() {
        lines = all_lines;
    }

    while word_count(&lines.join("\n")) > targets.max {
        match lines.iter().rposition(|line| !is_must_say(line)) {
            Some(index) => {
                lines.remove(index);
            }
            None => break,
        }
    }

    tracing::debug!(
        duration = duration.seconds(),
        words = word_count(&lines.join("\n")),
        max = targets.max,
        "Trimmed script to fit spot length"
    );

    join_clean(&lines)
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn is_must_say(line: &str) -> bool {
    line.trim_start().to_uppercase().starts_with(MUST_SAY_PREFIX)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Trim every line, drop the blank ones and join with newlines
fn join_clean<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

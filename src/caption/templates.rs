use crate::{
    caption::fields::CaptionFields, foundation::math::RandomSource, selection::model::Selection,
};

/// One caption sentence. `phrases` are indexed dead, smile, annoyed, sleepy, other.
pub struct Template {
    pub theme: &'static str,
    phrases: [&'static str; 5],
    compose: fn(&CaptionFields, &str) -> String,
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Template {
    pub fn render(&self, fields: &CaptionFields) -> String {
        let phrase = fields.expression().pick(&self.phrases);
        (self.compose)(fields, phrase)
    }
}

fn clause(value: &Option<String>, wrap: impl Fn(&str) -> String) -> String {
    value.as_deref().map(wrap).unwrap_or_default()
}

pub const TEMPLATES: [Template; 11] = [
    Template {
        theme: "crypto",
        phrases: [
            "getting rekt",
            "moon farming",
            "rage quitting",
            "diamond handing",
            "aping in",
        ],
        compose: |f, p| {
            format!(
                "A {} with a {} head{} was spotted {p} in the {}{}. Diamond hands only! 💎🙌",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" wearing {a}")),
                f.background,
                clause(&f.aura, |a| format!(" while going {a}")),
            )
        },
    },
    Template {
        theme: "legend",
        phrases: [
            "got liquidated",
            "hit a 100x",
            "bought the top",
            "hodled through the dip",
            "found alpha",
        ],
        compose: |f, p| {
            format!(
                "Legend says a {} with the head of a {}{} once {p} in the {}{}. WAGMI! 🚀",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" wielding {a}")),
                f.background,
                clause(&f.aura, |a| format!(" after achieving {a} form")),
            )
        },
    },
    Template {
        theme: "adventure",
        phrases: [
            "faced the final boss",
            "discovered a hidden treasure",
            "encountered a tough puzzle",
            "found a peaceful resting spot",
            "began an epic quest",
        ],
        compose: |f, p| {
            format!(
                "Deep in the {}, a brave {} with the wisdom of a {}{} {p}{}. The adventure continues! ⚔️",
                f.background,
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" equipped with {a}")),
                clause(&f.aura, |a| format!(" surrounded by {a} energy")),
            )
        },
    },
    Template {
        theme: "meme",
        phrases: [
            "down bad but not out",
            "living their best life",
            "having a heated gamer moment",
            "in their cozy era",
            "absolutely sending it",
        ],
        compose: |f, p| {
            format!(
                "This {} said \"I'm built different\" and proved it! With a {} head{}, they're {p} in the {}{}. No cap! 🔥",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" and {a} for style")),
                f.background,
                clause(&f.aura, |a| format!(" with that {a} glow")),
            )
        },
    },
    Template {
        theme: "mystic",
        phrases: [
            "made the ultimate sacrifice",
            "brought joy to all",
            "challenged the gods",
            "entered eternal meditation",
            "awakened their true power",
        ],
        compose: |f, p| {
            format!(
                "In ancient times, a mystical {} bearing the soul of a {}{} {p} within the sacred {}{}. Magic is real! ✨",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" blessed with {a}")),
                f.background,
                clause(&f.aura, |a| format!(", channeling the legendary {a}")),
            )
        },
    },
    Template {
        theme: "influencer",
        phrases: [
            "going through their villain arc",
            "spreading good vibes only",
            "calling out the haters",
            "promoting self-care Sunday",
            "dropping knowledge bombs",
        ],
        compose: |f, p| {
            format!(
                "Meet the {} influencer taking over social media! This {}-headed icon{} and is currently {p} from their {} studio{}. Follow for more! 📱",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" rocks {a} like nobody's business")),
                f.background,
                clause(&f.aura, |a| format!(" with that {a} aesthetic")),
            )
        },
    },
    Template {
        theme: "gaming",
        phrases: [
            "got spawn camped",
            "clutched a 1v5",
            "encountered a cheater",
            "pulled an all-nighter",
            "hit a sick trick shot",
        ],
        compose: |f, p| {
            format!(
                "Pro gamer alert! 🎮 This {} with {} reflexes{} just {p} in the {} arena{}. GG EZ!",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(
                    " using {a} for competitive advantage"
                )),
                f.background,
                clause(&f.aura, |a| format!(" while {a} mode was activated")),
            )
        },
    },
    Template {
        theme: "business",
        phrases: [
            "pivoting after a setback",
            "celebrating a successful exit",
            "dealing with difficult investors",
            "working around the clock",
            "disrupting the industry",
        ],
        compose: |f, p| {
            format!(
                "Entrepreneur spotlight! 💼 This {} CEO with the mind of a {}{} is {p} from their {} headquarters{}. Hustle never stops!",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" always seen with {a}")),
                f.background,
                clause(&f.aura, |a| format!(" radiating {a} energy")),
            )
        },
    },
    Template {
        theme: "food",
        phrases: [
            "tried the spiciest challenge",
            "created a masterpiece",
            "dealt with a Karen customer",
            "worked the night shift",
            "invented a new fusion cuisine",
        ],
        compose: |f, p| {
            format!(
                "Food critic review: ⭐ The legendary {} chef with a {}'s palate{} {p} in their {} restaurant{}. Bone apple tea! 🍽️",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(
                    " famous for their signature {a}"
                )),
                f.background,
                clause(&f.aura, |a| format!(" with {a} ambiance")),
            )
        },
    },
    Template {
        theme: "sports",
        phrases: [
            "gave it their all in defeat",
            "broke a personal record",
            "argued with the ref",
            "pushed through exhaustion",
            "dominated the competition",
        ],
        compose: |f, p| {
            format!(
                "Athletic achievement unlocked! 🏆 This {} athlete with the determination of a {}{} just {p} at the {} stadium{}. Beast mode activated!",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(" training with {a}")),
                f.background,
                clause(&f.aura, |a| format!(" with {a} intensity")),
            )
        },
    },
    Template {
        theme: "art",
        phrases: [
            "poured their soul into their final piece",
            "just had their gallery opening",
            "is fighting creative block",
            "works best in the late hours",
            "revolutionized their medium",
        ],
        compose: |f, p| {
            format!(
                "Featured artist spotlight! 🎨 Meet the {} artist with the vision of a {}{} who {p} in their {} studio{}. Art is life!",
                f.body,
                f.head,
                clause(&f.accessory, |a| format!(
                    " known for incorporating {a} into their work"
                )),
                f.background,
                clause(&f.aura, |a| format!(" surrounded by {a} inspiration")),
            )
        },
    },
];

/// Describe `selection` with one uniformly drawn template.
///
/// Returns an empty string only for an empty selection.
pub fn caption(selection: &Selection, rng: &mut dyn RandomSource) -> String {
    if selection.is_empty() {
        return String::new();
    }
    let fields = CaptionFields::from_selection(selection);
    let idx = rng.next_below(TEMPLATES.len()).min(TEMPLATES.len() - 1);
    tracing::trace!(theme = TEMPLATES[idx].theme, "caption template");
    TEMPLATES[idx].render(&fields)
}

#[cfg(test)]
#[path = "../../tests/unit/caption/templates.rs"]
mod tests;

//! Colors and emoji used when presenting tiers and classes.

pub const COLOR_GREYPLE: u32 = rgb(153, 170, 181);
pub const COLOR_BLUE: u32 = rgb(52, 152, 219);

const UNKNOWN_EMOJI: &str = "❓";

pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub fn tier_color(tier: &str) -> u32 {
    match tier {
        "EX" => rgb(255, 215, 0),
        "S" => rgb(220, 20, 60),
        "A" => rgb(147, 112, 219),
        "B" => rgb(65, 105, 225),
        "C" => rgb(144, 238, 144),
        _ => COLOR_GREYPLE,
    }
}

pub fn tier_emoji(tier: &str) -> &'static str {
    match tier {
        "EX" => "⭐",
        "S" => "💎",
        "A" => "🔷",
        "B" => "🔹",
        "C" => "⚪",
        _ => UNKNOWN_EMOJI,
    }
}

pub fn class_emoji(servant_class: &str) -> &'static str {
    match servant_class {
        "Saber" => "⚔️",
        "Archer" => "🏹",
        "Lancer" => "🔱",
        "Rider" => "🐎",
        "Caster" => "📖",
        "Assassin" => "🗡️",
        "Berserker" => "💢",
        "Ruler" => "⚖️",
        "Avenger" => "😈",
        "Alter Ego" => "👥",
        "Foreigner" => "🌌",
        "Shielder" => "🛡️",
        _ => UNKNOWN_EMOJI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiers_have_distinct_colors() {
        assert_eq!(tier_color("EX"), 0xffd700);
        assert_eq!(tier_color("S"), 0xdc143c);
        assert_ne!(tier_color("A"), tier_color("B"));
    }

    #[test]
    fn unknown_tier_falls_back_to_greyple() {
        assert_eq!(tier_color("SSR"), COLOR_GREYPLE);
        assert_eq!(tier_emoji("SSR"), "❓");
    }

    #[test]
    fn class_lookup_is_case_sensitive() {
        assert_eq!(class_emoji("Archer"), "🏹");
        assert_eq!(class_emoji("Alter Ego"), "👥");
        assert_eq!(class_emoji("archer"), "❓");
    }
}

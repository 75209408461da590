use servant_catalog_core::embed::truncate_with_ellipsis;
use servant_catalog_core::style::{class_emoji, tier_color, tier_emoji, COLOR_BLUE, COLOR_GREYPLE};
use servant_catalog_core::{DisplayUnit, ServantRecord};

use crate::models::RenderOptions;
use crate::CatalogError;

use super::catalog::{Catalog, RankedServant};

const SUMMON_TITLE: &str = "✨ SUMMONING SUCCESSFUL ✨";
const ROSTER_DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Plain servant card. Attaches the record's own image URL, unchanged, when
/// it is set and non-empty; never fails.
pub(crate) fn render(record: &ServantRecord) -> DisplayUnit {
    let unit = DisplayUnit::new(&record.name)
        .field("Name", &record.name, true)
        .field("Class", &record.servant_class, true)
        .field("Description", &record.description, false)
        .field("Noble Phantasm", &record.noble_phantasm, false);

    match record.image_url() {
        Some(url) => unit.image(url),
        None => unit,
    }
}

pub(crate) fn render_summon(
    catalog: &Catalog,
    servant: RankedServant<'_>,
    options: &RenderOptions,
) -> DisplayUnit {
    let record = servant.record;
    let description = match options.master.as_deref() {
        Some(master) => format!("**{master}** has summoned a legendary Heroic Spirit!"),
        None => "A legendary Heroic Spirit has answered the summons!".to_string(),
    };

    let unit = DisplayUnit::new(SUMMON_TITLE)
        .description(description)
        .color(tier_color(servant.tier))
        .field(
            format!("{} Servant Name", tier_emoji(servant.tier)),
            format!("**{}**", record.name),
            true,
        )
        .field(
            format!("{} Class", class_emoji(&record.servant_class)),
            format!("**{}**", record.servant_class),
            true,
        )
        .field("⭐ Rank", format!("**{}**", servant.tier), true)
        .field("📜 Description", &record.description, false)
        .field(
            "⚔️ Noble Phantasm",
            format!("*{}*", record.noble_phantasm),
            false,
        );

    let unit = match catalog.resolve_image_url(record) {
        Some(url) => unit.image(url),
        None => unit,
    };

    apply_common_options(unit, options)
}

pub(crate) fn render_roster(
    catalog: &Catalog,
    title: &str,
    servants: &[RankedServant<'_>],
    options: &RenderOptions,
) -> DisplayUnit {
    if servants.is_empty() {
        let unit = DisplayUnit::new(title)
            .description("No servants to show.")
            .color(COLOR_GREYPLE);
        return apply_common_options(unit, options);
    }

    let mut unit = DisplayUnit::new(title)
        .description(format!("{} servant(s)", servants.len()))
        .color(COLOR_BLUE);

    for servant in servants {
        let record = servant.record;
        unit = unit.field(
            format!("{} {}", tier_emoji(servant.tier), record.name),
            format!(
                "{} **Class:** {}\n⭐ **Rank:** {}\n⚔️ **NP:** {}\n📜 {}",
                class_emoji(&record.servant_class),
                record.servant_class,
                servant.tier,
                record.noble_phantasm,
                truncate_with_ellipsis(&record.description, ROSTER_DESCRIPTION_PREVIEW_CHARS),
            ),
            false,
        );
    }

    if let Some(url) = servants
        .first()
        .and_then(|first| catalog.resolve_image_url(first.record))
    {
        unit = unit.thumbnail(url);
    }

    apply_common_options(unit, options)
}

pub(crate) fn render_tier(
    catalog: &Catalog,
    tier: &str,
    options: &RenderOptions,
) -> Result<DisplayUnit, CatalogError> {
    let servants = catalog
        .list_by_tier(tier)?
        .iter()
        .map(|record| RankedServant { tier, record })
        .collect::<Vec<_>>();

    let title = format!("{} Tier {tier} Servants", tier_emoji(tier));
    let unit = render_roster(catalog, &title, &servants, options);

    Ok(if servants.is_empty() {
        unit
    } else {
        unit.color(tier_color(tier))
    })
}

fn apply_common_options(mut unit: DisplayUnit, options: &RenderOptions) -> DisplayUnit {
    if let Some(master) = options.master.as_deref() {
        unit = unit.footer(format!("Master: {master}"));
    }
    if let Some(timestamp) = options.timestamp {
        unit = unit.timestamp(timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true));
    }
    unit
}

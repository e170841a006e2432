use std::error::Error as StdError;

use chrono::{DateTime, FixedOffset, Utc};
use indexmap::IndexMap;
use tracing::warn;

use cardkit_types::{Card, DisplayBlock, Fact};

use crate::config::BuilderConfig;
use crate::fields::{FieldCache, Record};
use crate::host;
use crate::textpolicy;

/// Footer timestamps are rendered in the US-Eastern reference offset.
const FOOTER_OFFSET_SECS: i32 = -5 * 3600;

/// Assembles notification cards.
///
/// Environment and project name are resolved once at construction; the field
/// cache warms up lazily as record types flow through [`build_table`].
/// Builders are cheap to share: every build call works on its own [`Card`],
/// and the cache tolerates concurrent callers.
///
/// [`build_table`]: CardBuilder::build_table
pub struct CardBuilder {
    environment: Option<String>,
    project_name: Option<String>,
    fields: FieldCache,
}

impl CardBuilder {
    pub fn new(config: &BuilderConfig) -> Self {
        Self {
            environment: config.environment.clone(),
            project_name: config.project_name.clone(),
            fields: FieldCache::new(),
        }
    }

    /// Build a general card: title, optional summary subtitle, optional fact
    /// list, optional error body, optional free-text body, footer.
    ///
    /// Facts with empty values are dropped, not rendered blank. Error and
    /// free text are bounded independently by the text policy.
    pub fn build(
        &self,
        title: &str,
        summary: Option<&str>,
        facts: Option<&IndexMap<String, Option<String>>>,
        error: Option<&dyn StdError>,
        additional_text: Option<&str>,
    ) -> Card {
        let mut card = Card::new();

        push_header(&mut card, title, summary);
        if let Some(facts) = facts {
            push_facts(&mut card, facts);
        }
        if let Some(error) = error {
            push_text(&mut card, &error_text(error));
        }
        if let Some(text) = additional_text {
            push_text(&mut card, text);
        }
        self.push_footer(&mut card);

        card
    }

    /// Build a tabular card: title, optional summary, one bold header row of
    /// field names, one row per record, footer.
    ///
    /// An empty `items` slice skips the table portion entirely - no header
    /// row, no data rows - but the card still gets its header and footer.
    pub fn build_table<T: Record>(&self, title: &str, items: &[T], summary: Option<&str>) -> Card {
        let mut card = Card::new();

        push_header(&mut card, title, summary);

        if !items.is_empty() {
            let schema = self.fields.schema_of::<T>();

            let names = schema
                .fields()
                .iter()
                .map(|field| field.name().to_string())
                .collect();
            card.push(DisplayBlock::Row {
                cells: names,
                header: true,
            });

            for item in items {
                let cells = schema
                    .fields()
                    .iter()
                    .map(|field| field.value(item).unwrap_or_default())
                    .collect();
                card.push(DisplayBlock::Row {
                    cells,
                    header: false,
                });
            }
        }

        self.push_footer(&mut card);

        card
    }

    fn push_footer(&self, card: &mut Card) {
        push_footer_text(card, self.environment.as_deref());
        push_footer_text(card, self.project_name.as_deref());

        match host::machine_name() {
            Ok(name) => push_footer_text(card, Some(&name)),
            Err(err) => warn!(error = %err, "skipping machine name in card footer"),
        }

        let timestamp = footer_timestamp(Utc::now());
        push_footer_text(card, Some(&timestamp));
    }
}

fn push_header(card: &mut Card, title: &str, summary: Option<&str>) {
    card.push(DisplayBlock::Header {
        text: title.to_string(),
    });

    if let Some(summary) = summary.filter(|s| !s.is_empty()) {
        card.push(DisplayBlock::TextBlock {
            text: summary.to_string(),
        });
    }
}

fn push_facts(card: &mut Card, facts: &IndexMap<String, Option<String>>) {
    let kept: Vec<Fact> = facts
        .iter()
        .filter_map(|(title, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some(Fact::new(title.clone(), value)),
            _ => None,
        })
        .collect();

    if !kept.is_empty() {
        card.push(DisplayBlock::FactSet { facts: kept });
    }
}

fn push_text(card: &mut Card, text: &str) {
    if text.is_empty() {
        return;
    }

    let (bounded, _truncated) = textpolicy::bound_text(text);
    card.push(DisplayBlock::TextBlock {
        text: bounded.into_owned(),
    });
}

fn push_footer_text(card: &mut Card, text: Option<&str>) {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        card.push(DisplayBlock::Footer {
            text: text.to_string(),
        });
    }
}

/// Render an error as display text: its message plus the full `source` chain.
pub fn error_text(error: &dyn StdError) -> String {
    let mut text = error.to_string();

    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str("\ncaused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text
}

fn footer_timestamp(now: DateTime<Utc>) -> String {
    // chrono only rejects offsets beyond +/-24h, so the fixed offset is
    // always in range.
    let eastern = FixedOffset::east_opt(FOOTER_OFFSET_SECS).expect("fixed offset is in range");
    now.with_timezone(&eastern)
        .format("%Y-%m-%d %H:%M:%S %:z")
        .to_string()
}

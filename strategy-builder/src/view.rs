//! Plain-text rendering of pools, drafts and saved strategies.

use strategy::{Strategy, YieldSummary};

use crate::{PoolRow, StrategyBuilder};

/// Formats a USD amount, e.g. `1234.5` -> `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// Formats a fractional rate as a percentage, e.g. `0.175` -> `17.50%`.
pub fn format_percentage(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn summary_lines(summary: &YieldSummary) -> String {
    format!(
        "  Total Value:    {}\n  Expected Yield: {}\n",
        format_currency(summary.total_value),
        format_percentage(summary.weighted_yield)
    )
}

pub fn render_pool_rows(rows: &[PoolRow]) -> String {
    if rows.is_empty() {
        return "No pools selected.\n".to_string();
    }
    rows.iter()
        .map(|row| {
            let amount = row.amount.map(format_currency).unwrap_or_else(|| "-".to_string());
            format!(
                "  [{}] {}  {} APY  allocated: {}\n",
                row.pool_id,
                row.label,
                format_percentage(row.rate),
                amount
            )
        })
        .collect()
}

/// The draft as the form shows it: name, allocations and running totals.
pub fn render_draft(builder: &StrategyBuilder) -> String {
    let draft = builder.get_draft();
    let name = if draft.get_name().is_empty() {
        "(unnamed)"
    } else {
        draft.get_name()
    };

    let mut out = format!("Draft: {}\n", name);
    for row in builder.pool_rows() {
        if let Some(amount) = row.amount {
            out.push_str(&format!("  {}  {}\n", row.label, format_currency(amount)));
        }
    }
    out.push_str(&summary_lines(&builder.get_summary()));
    if !builder.can_commit() {
        out.push_str("  (needs a name and at least one allocation to save)\n");
    }
    out
}

pub fn render_strategy(builder: &StrategyBuilder, index: usize, strategy: &Strategy) -> String {
    let mut out = format!("#{} {}\n", index + 1, strategy.get_name());
    for row in builder.strategy_rows(strategy) {
        out.push_str(&format!("  {}  {}\n", row.label, format_currency(row.amount)));
    }
    out.push_str(&summary_lines(&strategy.get_summary()));
    out
}

pub fn render_saved(builder: &StrategyBuilder) -> String {
    let store = builder.get_store();
    if store.is_empty() {
        return "No saved strategies.\n".to_string();
    }
    let mut out = String::from("Saved Strategies\n");
    for (index, strategy) in store.iter().enumerate() {
        out.push_str(&render_strategy(builder, index, strategy));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-4200.0), "-$4,200.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.175), "17.50%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(1.2), "120.00%");
    }

    #[test]
    fn test_render_empty_store() {
        let builder = StrategyBuilder::new(strategy::Catalog::default(), vec![]);
        assert_eq!(render_saved(&builder), "No saved strategies.\n");
        assert_eq!(render_pool_rows(&builder.pool_rows()), "No pools selected.\n");
    }

    #[test]
    fn test_render_draft_and_strategy() {
        let catalog = strategy::Catalog::new(
            vec![
                strategy::Pool::new("A", vec![], vec![0.10]),
                strategy::Pool::new("B", vec![], vec![0.20]),
            ],
            vec![],
        );
        let mut builder = StrategyBuilder::new(catalog, vec![]);
        builder.set_allocation("A", "100");
        builder.set_allocation("B", "300");

        assert_eq!(
            render_draft(&builder),
            "Draft: (unnamed)\n    $100.00\n    $300.00\n\
             \x20 Total Value:    $400.00\n  Expected Yield: 17.50%\n\
             \x20 (needs a name and at least one allocation to save)\n"
        );

        builder.set_name("Blend");
        let saved = builder.commit().cloned().unwrap();
        assert_eq!(
            render_strategy(&builder, 0, &saved),
            "#1 Blend\n    $100.00\n    $300.00\n\
             \x20 Total Value:    $400.00\n  Expected Yield: 17.50%\n"
        );
    }
}

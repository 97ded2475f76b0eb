//! Text rendering of valuation results.
//!
//! Consumes a [`CalculationResult`] and never computes one; the engine has
//! no knowledge of how its output is displayed.

use std::fmt::Write;

use crate::models::{CalculationResult, Competition, PlayerProfile};

/// Prefix a salary range with a currency symbol, if one is configured.
pub fn format_salary(range: &str, currency: Option<&str>) -> String {
    match currency {
        Some(symbol) => format!("{} {}", symbol, range),
        None => range.to_string(),
    }
}

/// Render the on-screen score summary.
pub fn render_summary(
    profile: &PlayerProfile,
    result: &CalculationResult,
    currency: Option<&str>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Market Valuation: {} ===", profile.name);
    let _ = writeln!(out, "Score:        {} / 100", result.score);
    let _ = writeln!(out, "Tier:         {}", result.tier);
    let _ = writeln!(
        out,
        "Salary range: {}",
        format_salary(&result.salary_range, currency)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Breakdown:");
    let _ = writeln!(
        out,
        "  Role & leadership:     {:.1}",
        result.breakdown.role_score
    );
    let _ = writeln!(
        out,
        "  Performance:           {:.1}",
        result.breakdown.stats_score
    );
    let _ = writeln!(
        out,
        "  Social influence:      {:.1}",
        result.breakdown.social_score
    );
    let _ = writeln!(
        out,
        "  Competitions & titles: {:.1}",
        result.breakdown.competition_score
    );
    let _ = writeln!(
        out,
        "  Recent history:        {:.1}",
        result.breakdown.history_score
    );

    out
}

/// Render the full report: the summary plus the profile details it was
/// computed from.
pub fn render_full_report(
    profile: &PlayerProfile,
    result: &CalculationResult,
    currency: Option<&str>,
) -> String {
    let mut out = render_summary(profile, result, currency);

    let _ = writeln!(out);
    let _ = writeln!(out, "Profile:");
    let _ = writeln!(out, "  Role:       {}", profile.role);
    let _ = writeln!(
        out,
        "  Captain:    {}",
        if profile.is_captain { "yes" } else { "no" }
    );
    let _ = writeln!(out, "  Kills:      {}", profile.official_kills);
    if profile.is_captain {
        let _ = writeln!(out, "  Booyahs:    {}", profile.last_booyahs);
    }
    let _ = writeln!(out, "  Followers:  {}", profile.followers);
    let _ = writeln!(out, "  Engagement: {:.1}%", profile.engagement);

    if !profile.selected_competitions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Competitions played:");
        for competition in &profile.selected_competitions {
            let _ = writeln!(
                out,
                "  - {} (tier {}, {})",
                competition.name, competition.tier, competition.format
            );
        }
    }

    if !profile.titles.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Titles:");
        for title in &profile.titles {
            let _ = writeln!(out, "  - {} x{}", title.name, title.count);
        }
    }

    if !profile.participations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Participations:");
        for participation in &profile.participations {
            let _ = writeln!(out, "  - {} x{}", participation.name, participation.count);
        }
    }

    if !profile.recent_results.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recent results:");
        for recent in &profile.recent_results {
            let _ = writeln!(
                out,
                "  - {} ({}) - position {}",
                recent.name, recent.format, recent.position
            );
        }
    }

    out
}

/// Render the reference competition table.
pub fn render_competitions(competitions: &[Competition]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Reference competitions ===");
    for competition in competitions {
        let _ = writeln!(
            out,
            "  {}  {:<12} tier {}, {}",
            competition.id, competition.name, competition.tier, competition.format
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::calculate;
    use crate::models::{reference_competitions, CompetitionFormat, Role};

    use super::*;

    fn sample_profile() -> PlayerProfile {
        let mut profile = PlayerProfile {
            name: "Nobru".to_string(),
            role: Role::Rush1,
            is_captain: true,
            official_kills: 1000,
            last_booyahs: 10,
            followers: 1_000_000,
            engagement: 100.0,
            ..Default::default()
        };
        let ewc = reference_competitions()
            .into_iter()
            .find(|c| c.name == "EWC")
            .unwrap();
        profile.toggle_competition(ewc);
        profile.add_title("EWC", 1);
        profile.add_recent_result("EWC", CompetitionFormat::InPerson, 1);
        profile
    }

    #[test]
    fn test_summary_contents() {
        let profile = sample_profile();
        let result = calculate::evaluate(&profile);
        let summary = render_summary(&profile, &result, None);

        assert!(summary.contains("Market Valuation: Nobru"));
        assert!(summary.contains("Score:        72 / 100"));
        assert!(summary.contains("Tier:         A"));
        assert!(summary.contains("Salary range: 5,000-7,999"));
        assert!(summary.contains("Competitions & titles: 14.4"));
    }

    #[test]
    fn test_summary_with_currency() {
        let profile = sample_profile();
        let result = calculate::evaluate(&profile);
        let summary = render_summary(&profile, &result, Some("R$"));

        assert!(summary.contains("Salary range: R$ 5,000-7,999"));
    }

    #[test]
    fn test_full_report_contents() {
        let profile = sample_profile();
        let result = calculate::evaluate(&profile);
        let report = render_full_report(&profile, &result, None);

        assert!(report.contains("Role:       RUSH1"));
        assert!(report.contains("Captain:    yes"));
        assert!(report.contains("Booyahs:    10"));
        assert!(report.contains("Competitions played:"));
        assert!(report.contains("- EWC (tier S, in person)"));
        assert!(report.contains("Titles:"));
        assert!(report.contains("- EWC x1"));
        assert!(report.contains("position 1"));
    }

    #[test]
    fn test_full_report_omits_empty_sections() {
        let profile = PlayerProfile {
            name: "Rookie".to_string(),
            ..Default::default()
        };
        let result = calculate::evaluate(&profile);
        let report = render_full_report(&profile, &result, None);

        assert!(!report.contains("Titles:"));
        assert!(!report.contains("Participations:"));
        assert!(!report.contains("Recent results:"));
        assert!(!report.contains("Booyahs:"));
    }

    #[test]
    fn test_render_competitions() {
        let rendered = render_competitions(&reference_competitions());
        assert!(rendered.contains("c4"));
        assert!(rendered.contains("EWC"));
        assert!(rendered.contains("FFWS WORLD"));
    }
}

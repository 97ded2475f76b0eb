//! Market value scoring engine.
//!
//! Maps a [`PlayerProfile`] to a deterministic [`CalculationResult`]:
//! - Five per-category sub-scores, each floored at 0 and capped
//! - Total clamped to 0-100 and rounded
//! - Tier and salary band classification
//!
//! The engine is a total, side-effect-free function: any profile, however
//! degenerate, produces a valid result. Input validation belongs to the
//! form collaborator, not here.

use crate::models::{
    reference_competitions, CalculationResult, Competition, PlayerProfile, PlayerTier,
    ScoreBreakdown,
};

/// Maximum points from performance stats.
pub const STATS_CAP: f64 = 20.0;

/// Maximum points from social influence.
pub const SOCIAL_CAP: f64 = 15.0;

/// Maximum points from competitions and titles.
pub const COMPETITION_CAP: f64 = 40.0;

/// Maximum points from recent history.
pub const HISTORY_CAP: f64 = 15.0;

/// Flat leadership bonus for captains.
const CAPTAIN_BONUS: f64 = 5.0;

/// Kill count considered excellent for a captain.
const CAPTAIN_KILLS_REFERENCE: f64 = 1000.0;

/// Kill count considered excellent for a non-captain; steeper because the
/// booyah weight is folded into the kill curve.
const SOLO_KILLS_REFERENCE: f64 = 800.0;

/// Booyah count considered excellent over the last competition.
const BOOYAHS_REFERENCE: f64 = 10.0;

/// Points per counted tournament participation.
const PARTICIPATION_POINTS: f64 = 0.5;

/// Weight of a title whose name matches no known competition.
const UNMATCHED_TITLE_WEIGHT: f64 = 2.0;

/// Evaluate a profile into a score, tier and salary band.
pub fn evaluate(profile: &PlayerProfile) -> CalculationResult {
    let breakdown = ScoreBreakdown {
        role_score: role_score(profile),
        stats_score: stats_score(profile),
        social_score: social_score(profile),
        competition_score: competition_score(profile),
        history_score: history_score(profile),
    };

    let score = breakdown.total().clamp(0.0, 100.0).round() as u32;
    let tier = PlayerTier::from_score(score);

    CalculationResult {
        score,
        tier,
        salary_range: tier.salary_range().to_string(),
        breakdown,
    }
}

/// Role and leadership score: base weight by role plus a captain bonus.
pub fn role_score(profile: &PlayerProfile) -> f64 {
    let mut score = profile.role.base_weight();
    if profile.is_captain {
        score += CAPTAIN_BONUS;
    }
    score.max(0.0)
}

/// Performance score from kills and, for captains, recent booyahs.
pub fn stats_score(profile: &PlayerProfile) -> f64 {
    let kills = profile.official_kills as f64;

    let score = if profile.is_captain {
        let kill_score = (kills / CAPTAIN_KILLS_REFERENCE * 15.0).min(15.0);
        let booyah_score = (profile.last_booyahs as f64 / BOOYAHS_REFERENCE * 5.0).min(5.0);
        kill_score + booyah_score
    } else {
        (kills / SOLO_KILLS_REFERENCE * STATS_CAP).min(STATS_CAP)
    };

    score.clamp(0.0, STATS_CAP)
}

/// Social influence score: log-scaled followers plus linear engagement.
pub fn social_score(profile: &PlayerProfile) -> f64 {
    let mut score = 0.0;

    // 100 followers scores 0; 1M saturates the 10-point follower cap.
    if profile.followers > 0 {
        let log_followers = (profile.followers as f64).log10();
        score += ((log_followers - 2.0) * 2.5).clamp(0.0, 10.0);
    }

    score += (profile.engagement / 10.0 * 5.0).min(5.0);

    score.clamp(0.0, SOCIAL_CAP)
}

/// Competition and titles score.
///
/// Played competitions contribute their tier value with an in-person bonus;
/// titles are weighted by the tier of the competition they resolve to, or a
/// flat fallback when the name matches nothing known.
pub fn competition_score(profile: &PlayerProfile) -> f64 {
    let reference = reference_competitions();
    let mut score = 0.0;

    for competition in &profile.selected_competitions {
        score +=
            competition.tier.participation_value() * competition.format.participation_multiplier();
    }

    for title in &profile.titles {
        let weight = match resolve_title(profile, &reference, &title.name) {
            Some(competition) => {
                competition.tier.title_weight() * competition.format.placement_multiplier()
            }
            None => UNMATCHED_TITLE_WEIGHT,
        };
        score += weight * title.count as f64;
    }

    score.clamp(0.0, COMPETITION_CAP)
}

/// Recent history score: counted participations plus the last placements.
pub fn history_score(profile: &PlayerProfile) -> f64 {
    let mut score = 0.0;

    for participation in &profile.participations {
        score += participation.count as f64 * PARTICIPATION_POINTS;
    }

    for recent in &profile.recent_results {
        score += recent.placement_points() * recent.format.placement_multiplier();
    }

    score.clamp(0.0, HISTORY_CAP)
}

/// Resolve a title name against the profile's selection first, then the
/// reference table. Names are matched case-insensitively.
fn resolve_title<'a>(
    profile: &'a PlayerProfile,
    reference: &'a [Competition],
    name: &str,
) -> Option<&'a Competition> {
    profile
        .selected_competitions
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .or_else(|| reference.iter().find(|c| c.name.eq_ignore_ascii_case(name)))
}

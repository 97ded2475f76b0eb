//! The aggregate player profile edited by the form collaborators.

use serde::{Deserialize, Serialize};

use super::{
    reference_competitions, Competition, CompetitionFormat, CompetitionId, CompetitionTier,
    CountedEntry, EntryId, RecentResult, Role,
};

/// Maximum number of recent results tracked on a profile.
pub const MAX_RECENT_RESULTS: usize = 3;

/// A problem found while validating form input.
///
/// Validation is a form concern; the scoring engine itself is total and
/// never rejects a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Player name is empty
    MissingName,
    /// Engagement is outside the 0-100 percent range
    EngagementOutOfRange,
    /// No competitions selected (warning, not an error)
    NoCompetitionsSelected,
    /// More recent results than the form allows
    TooManyRecentResults,
}

impl ValidationIssue {
    /// Whether the form should refuse to proceed, as opposed to warning.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, ValidationIssue::NoCompetitionsSelected)
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingName => write!(f, "player name is required"),
            ValidationIssue::EngagementOutOfRange => {
                write!(f, "engagement must be between 0 and 100")
            }
            ValidationIssue::NoCompetitionsSelected => {
                write!(f, "no competitions selected")
            }
            ValidationIssue::TooManyRecentResults => {
                write!(f, "at most {} recent results are tracked", MAX_RECENT_RESULTS)
            }
        }
    }
}

/// A player profile under evaluation.
///
/// Constructed empty, mutated field-by-field by its producer (the wizard, a
/// loaded file or a test harness) and discarded on reset. Collections are
/// insertion-ordered; membership in `selected_competitions` is keyed by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    /// Player name
    pub name: String,

    /// In-game role
    pub role: Role,

    /// Whether the player captains their squad
    pub is_captain: bool,

    /// Career official kills
    pub official_kills: u64,

    /// Booyahs in the last competition (meaningful only for captains)
    pub last_booyahs: u32,

    /// Social media followers
    pub followers: u64,

    /// Engagement rate, 0-100 percent
    pub engagement: f64,

    /// Competitions played (reference + custom, unique by id)
    pub selected_competitions: Vec<Competition>,

    /// Titles won
    pub titles: Vec<CountedEntry>,

    /// Tournament participations
    pub participations: Vec<CountedEntry>,

    /// Up to 3 most recent results
    pub recent_results: Vec<RecentResult>,
}

impl PlayerProfile {
    /// Toggle a competition in the selection: present flips to absent and
    /// vice versa, keyed by id.
    pub fn toggle_competition(&mut self, competition: Competition) {
        match self
            .selected_competitions
            .iter()
            .position(|c| c.id == competition.id)
        {
            Some(pos) => {
                self.selected_competitions.remove(pos);
            }
            None => self.selected_competitions.push(competition),
        }
    }

    /// Add a user-defined competition to the selection, returning its
    /// generated id.
    pub fn add_custom_competition(
        &mut self,
        name: String,
        format: CompetitionFormat,
        tier: CompetitionTier,
    ) -> CompetitionId {
        let competition = Competition::custom(name, format, tier);
        let id = competition.id.clone();
        self.selected_competitions.push(competition);
        id
    }

    /// Remove a competition from the selection by id.
    pub fn remove_competition(&mut self, id: &CompetitionId) -> bool {
        let before = self.selected_competitions.len();
        self.selected_competitions.retain(|c| &c.id != id);
        self.selected_competitions.len() != before
    }

    /// User-defined competitions currently selected.
    pub fn custom_competitions(&self) -> impl Iterator<Item = &Competition> {
        self.selected_competitions.iter().filter(|c| c.is_custom())
    }

    /// All competitions known to this profile: the reference table plus any
    /// customs in the selection.
    pub fn known_competitions(&self) -> Vec<Competition> {
        let mut known = reference_competitions();
        known.extend(self.custom_competitions().cloned());
        known
    }

    /// Append a title entry, returning its generated id.
    pub fn add_title(&mut self, name: impl Into<String>, count: u32) -> EntryId {
        let entry = CountedEntry::new(name, count);
        let id = entry.id.clone();
        self.titles.push(entry);
        id
    }

    /// Replace a title entry by id, keeping its position.
    pub fn replace_title(&mut self, id: &EntryId, name: impl Into<String>, count: u32) -> bool {
        match self.titles.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.name = name.into();
                entry.count = count;
                true
            }
            None => false,
        }
    }

    /// Remove a title entry by id.
    pub fn remove_title(&mut self, id: &EntryId) -> bool {
        let before = self.titles.len();
        self.titles.retain(|e| &e.id != id);
        self.titles.len() != before
    }

    /// Append a participation entry, returning its generated id.
    pub fn add_participation(&mut self, name: impl Into<String>, count: u32) -> EntryId {
        let entry = CountedEntry::new(name, count);
        let id = entry.id.clone();
        self.participations.push(entry);
        id
    }

    /// Replace a participation entry by id, keeping its position.
    pub fn replace_participation(
        &mut self,
        id: &EntryId,
        name: impl Into<String>,
        count: u32,
    ) -> bool {
        match self.participations.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.name = name.into();
                entry.count = count;
                true
            }
            None => false,
        }
    }

    /// Remove a participation entry by id.
    pub fn remove_participation(&mut self, id: &EntryId) -> bool {
        let before = self.participations.len();
        self.participations.retain(|e| &e.id != id);
        self.participations.len() != before
    }

    /// Append a recent result, returning its generated id, or `None` when
    /// all slots are taken.
    pub fn add_recent_result(
        &mut self,
        name: impl Into<String>,
        format: CompetitionFormat,
        position: u32,
    ) -> Option<EntryId> {
        if self.recent_results.len() >= MAX_RECENT_RESULTS {
            return None;
        }
        let result = RecentResult::new(name, format, position);
        let id = result.id.clone();
        self.recent_results.push(result);
        Some(id)
    }

    /// Replace a recent result by id, keeping its position in the list.
    pub fn replace_recent_result(
        &mut self,
        id: &EntryId,
        name: impl Into<String>,
        format: CompetitionFormat,
        position: u32,
    ) -> bool {
        match self.recent_results.iter_mut().find(|r| &r.id == id) {
            Some(result) => {
                result.name = name.into();
                result.format = format;
                result.position = position;
                true
            }
            None => false,
        }
    }

    /// Remove a recent result by id.
    pub fn remove_recent_result(&mut self, id: &EntryId) -> bool {
        let before = self.recent_results.len();
        self.recent_results.retain(|r| &r.id != id);
        self.recent_results.len() != before
    }

    /// Validate form input, returning every issue found.
    ///
    /// An empty list means the profile is clean; a non-blocking issue is a
    /// warning the form may surface without refusing to proceed.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(ValidationIssue::MissingName);
        }
        if !(0.0..=100.0).contains(&self.engagement) {
            issues.push(ValidationIssue::EngagementOutOfRange);
        }
        if self.selected_competitions.is_empty() {
            issues.push(ValidationIssue::NoCompetitionsSelected);
        }
        if self.recent_results.len() > MAX_RECENT_RESULTS {
            issues.push(ValidationIssue::TooManyRecentResults);
        }

        issues
    }
}

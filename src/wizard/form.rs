//! Interactive line-oriented form that builds a profile step by step.
//!
//! The driver owns a reader/writer pair rather than stdin/stdout directly,
//! so the whole flow can be exercised in tests with scripted input.

use std::io::{self, BufRead, Write};

use crate::calculate;
use crate::models::{
    CalculationResult, CompetitionFormat, CompetitionTier, PlayerProfile, Role,
    MAX_RECENT_RESULTS,
};
use crate::report;
use crate::wizard::{Action, Screen, TOTAL_STEPS};

/// Drives the guided-form state machine over a reader/writer pair.
pub struct FormDriver<R, W> {
    input: R,
    output: W,
    currency: Option<String>,
}

impl<R: BufRead, W: Write> FormDriver<R, W> {
    /// Create a new driver.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            currency: None,
        }
    }

    /// Builder method to set the currency symbol shown in salary ranges.
    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    /// Run the whole flow.
    ///
    /// Returns the last evaluated profile and result, or `None` when the
    /// user quits (or input ends) before reaching the result screen.
    pub fn run(&mut self) -> io::Result<Option<(PlayerProfile, CalculationResult)>> {
        let mut screen = Screen::Landing;
        let mut profile = PlayerProfile::default();
        let mut last: Option<(PlayerProfile, CalculationResult)> = None;

        loop {
            match screen {
                Screen::Landing => {
                    writeln!(self.output)?;
                    writeln!(self.output, "=== Market Scout ===")?;
                    writeln!(
                        self.output,
                        "Estimate the market value of a competitive Free Fire player."
                    )?;
                    let Some(choice) = self.prompt("[s]tart, [h]elp or [q]uit")? else {
                        return Ok(last);
                    };
                    match choice.as_str() {
                        "" | "s" | "start" => screen = screen.apply(Action::Start),
                        "h" | "help" => screen = screen.apply(Action::Help),
                        "q" | "quit" => return Ok(last),
                        other => writeln!(self.output, "Unrecognized option: {}", other)?,
                    }
                }
                Screen::Help => {
                    self.print_help()?;
                    if self.prompt("Press Enter to go back")?.is_none() {
                        return Ok(last);
                    }
                    screen = screen.apply(Action::Back);
                }
                Screen::Step(step) => {
                    writeln!(self.output)?;
                    writeln!(
                        self.output,
                        "-- Step {}/{}: {} --",
                        step + 1,
                        TOTAL_STEPS,
                        Screen::step_title(step)
                    )?;
                    if !self.fill_step(step, &mut profile)? {
                        return Ok(last);
                    }
                    screen = screen.apply(Action::Next);
                }
                Screen::Result => {
                    for issue in profile.validate() {
                        writeln!(self.output, "note: {}", issue)?;
                    }
                    let result = calculate::evaluate(&profile);
                    writeln!(self.output)?;
                    write!(
                        self.output,
                        "{}",
                        report::render_summary(&profile, &result, self.currency.as_deref())
                    )?;
                    last = Some((profile.clone(), result));

                    let Some(choice) = self.prompt("[f]ull report, [r]estart or [q]uit")? else {
                        return Ok(last);
                    };
                    match choice.as_str() {
                        "f" | "full" => screen = screen.apply(Action::ShowFullReport),
                        "r" | "restart" => {
                            profile = PlayerProfile::default();
                            screen = screen.apply(Action::Restart);
                        }
                        _ => return Ok(last),
                    }
                }
                Screen::FullReport => {
                    // Recomputed, never cached: the result is a projection.
                    let result = calculate::evaluate(&profile);
                    writeln!(self.output)?;
                    write!(
                        self.output,
                        "{}",
                        report::render_full_report(&profile, &result, self.currency.as_deref())
                    )?;

                    let Some(choice) = self.prompt("[b]ack, [r]estart or [q]uit")? else {
                        return Ok(last);
                    };
                    match choice.as_str() {
                        "b" | "back" => screen = screen.apply(Action::Back),
                        "r" | "restart" => {
                            profile = PlayerProfile::default();
                            screen = screen.apply(Action::Restart);
                        }
                        _ => return Ok(last),
                    }
                }
            }
        }
    }

    fn fill_step(&mut self, step: usize, profile: &mut PlayerProfile) -> io::Result<bool> {
        match step {
            0 => self.step_identity(profile),
            1 => self.step_role_stats(profile),
            2 => self.step_influence(profile),
            3 => self.step_competitions(profile),
            4 => self.step_history(profile),
            _ => self.step_recent(profile),
        }
    }

    fn step_identity(&mut self, profile: &mut PlayerProfile) -> io::Result<bool> {
        loop {
            let Some(name) = self.prompt("Player name")? else {
                return Ok(false);
            };
            if name.is_empty() {
                writeln!(self.output, "Player name is required.")?;
                continue;
            }
            profile.name = name;
            return Ok(true);
        }
    }

    fn step_role_stats(&mut self, profile: &mut PlayerProfile) -> io::Result<bool> {
        writeln!(self.output, "Roles:")?;
        for (i, role) in Role::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, role)?;
        }
        let Some(index) = self.prompt_index("Role", Role::ALL.len(), 1)? else {
            return Ok(false);
        };
        profile.role = Role::ALL[index - 1];

        let Some(captain) = self.prompt_yes_no("Captain? [y/N]")? else {
            return Ok(false);
        };
        profile.is_captain = captain;

        let Some(kills) = self.prompt_u64("Official kills", 0)? else {
            return Ok(false);
        };
        profile.official_kills = kills;

        if profile.is_captain {
            let Some(booyahs) = self.prompt_u32("Booyahs in the last competition", 0)? else {
                return Ok(false);
            };
            profile.last_booyahs = booyahs;
        }

        Ok(true)
    }

    fn step_influence(&mut self, profile: &mut PlayerProfile) -> io::Result<bool> {
        let Some(followers) = self.prompt_u64("Followers", 0)? else {
            return Ok(false);
        };
        profile.followers = followers;

        let Some(engagement) = self.prompt_engagement()? else {
            return Ok(false);
        };
        profile.engagement = engagement;

        Ok(true)
    }

    fn step_competitions(&mut self, profile: &mut PlayerProfile) -> io::Result<bool> {
        loop {
            let known = profile.known_competitions();
            for (i, competition) in known.iter().enumerate() {
                let mark = if profile
                    .selected_competitions
                    .iter()
                    .any(|c| c.id == competition.id)
                {
                    "x"
                } else {
                    " "
                };
                writeln!(
                    self.output,
                    "  {}. [{}] {} (tier {}, {})",
                    i + 1,
                    mark,
                    competition.name,
                    competition.tier,
                    competition.format
                )?;
            }

            let Some(choice) =
                self.prompt("Toggle by number, [c]ustom to add, blank to continue")?
            else {
                return Ok(false);
            };
            if choice.is_empty() {
                return Ok(true);
            }
            if choice == "c" || choice == "custom" {
                if !self.add_custom_competition(profile)? {
                    return Ok(false);
                }
                continue;
            }
            match choice.parse::<usize>() {
                Ok(n) if n >= 1 && n <= known.len() => {
                    profile.toggle_competition(known[n - 1].clone());
                }
                _ => writeln!(self.output, "Unrecognized option: {}", choice)?,
            }
        }
    }

    fn add_custom_competition(&mut self, profile: &mut PlayerProfile) -> io::Result<bool> {
        let Some(name) = self.prompt("Competition name (blank to cancel)")? else {
            return Ok(false);
        };
        if name.is_empty() {
            return Ok(true);
        }
        let Some(format) = self.prompt_format()? else {
            return Ok(false);
        };
        let Some(tier) = self.prompt_tier()? else {
            return Ok(false);
        };
        profile.add_custom_competition(name, format, tier);
        Ok(true)
    }

    fn step_history(&mut self, profile: &mut PlayerProfile) -> io::Result<bool> {
        writeln!(self.output, "Titles won (blank name to finish):")?;
        loop {
            let Some(name) = self.prompt("  Title competition")? else {
                return Ok(false);
            };
            if name.is_empty() {
                break;
            }
            let Some(count) = self.prompt_u32("  Count", 1)? else {
                return Ok(false);
            };
            profile.add_title(name, count);
        }

        writeln!(self.output, "Tournament participations (blank name to finish):")?;
        loop {
            let Some(name) = self.prompt("  Participation competition")? else {
                return Ok(false);
            };
            if name.is_empty() {
                break;
            }
            let Some(count) = self.prompt_u32("  Count", 1)? else {
                return Ok(false);
            };
            profile.add_participation(name, count);
        }

        Ok(true)
    }

    fn step_recent(&mut self, profile: &mut PlayerProfile) -> io::Result<bool> {
        writeln!(
            self.output,
            "Up to {} most recent competitions (blank name to finish):",
            MAX_RECENT_RESULTS
        )?;
        while profile.recent_results.len() < MAX_RECENT_RESULTS {
            let Some(name) = self.prompt("  Competition")? else {
                return Ok(false);
            };
            if name.is_empty() {
                break;
            }
            let Some(format) = self.prompt_format()? else {
                return Ok(false);
            };
            let Some(position) = self.prompt_position()? else {
                return Ok(false);
            };
            profile.add_recent_result(name, format, position);
        }
        Ok(true)
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== How scoring works ===")?;
        writeln!(
            self.output,
            "Role & leadership: base weight by role, +5 for captains."
        )?;
        writeln!(
            self.output,
            "Performance (max 20): kills against a 1000-kill reference for captains"
        )?;
        writeln!(
            self.output,
            "  (plus recent booyahs), or a steeper 800-kill curve otherwise."
        )?;
        writeln!(
            self.output,
            "Influence (max 15): followers on a log scale plus engagement."
        )?;
        writeln!(
            self.output,
            "Competitions & titles (max 40): tier-weighted, in-person events"
        )?;
        writeln!(self.output, "  score higher.")?;
        writeln!(
            self.output,
            "Recent history (max 15): participations and the last 3 placements."
        )?;
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_u64(&mut self, label: &str, default: u64) -> io::Result<Option<u64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(default));
            }
            match line.parse::<u64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Enter a whole non-negative number.")?,
            }
        }
    }

    fn prompt_u32(&mut self, label: &str, default: u32) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(default));
            }
            match line.parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Enter a whole non-negative number.")?,
            }
        }
    }

    fn prompt_index(&mut self, label: &str, max: usize, default: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(default));
            }
            match line.parse::<usize>() {
                Ok(n) if n >= 1 && n <= max => return Ok(Some(n)),
                _ => writeln!(self.output, "Enter a number between 1 and {}.", max)?,
            }
        }
    }

    fn prompt_yes_no(&mut self, label: &str) -> io::Result<Option<bool>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };
        Ok(Some(matches!(line.as_str(), "y" | "yes")))
    }

    fn prompt_engagement(&mut self) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt("Engagement % (0-100)")? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(0.0));
            }
            match line.parse::<f64>() {
                Ok(value) if (0.0..=100.0).contains(&value) => return Ok(Some(value)),
                _ => writeln!(self.output, "Enter a percentage between 0 and 100.")?,
            }
        }
    }

    fn prompt_format(&mut self) -> io::Result<Option<CompetitionFormat>> {
        loop {
            let Some(line) = self.prompt("  Format: [o]nline or [i]n person")? else {
                return Ok(None);
            };
            match line.as_str() {
                "" | "o" | "online" => return Ok(Some(CompetitionFormat::Online)),
                "i" | "in person" | "in-person" => return Ok(Some(CompetitionFormat::InPerson)),
                _ => writeln!(self.output, "Enter 'o' or 'i'.")?,
            }
        }
    }

    fn prompt_tier(&mut self) -> io::Result<Option<CompetitionTier>> {
        loop {
            let Some(line) = self.prompt("  Tier [S/A/B/C]")? else {
                return Ok(None);
            };
            match line.to_ascii_uppercase().as_str() {
                "S" => return Ok(Some(CompetitionTier::S)),
                "A" => return Ok(Some(CompetitionTier::A)),
                "" | "B" => return Ok(Some(CompetitionTier::B)),
                "C" => return Ok(Some(CompetitionTier::C)),
                _ => writeln!(self.output, "Enter S, A, B or C.")?,
            }
        }
    }

    fn prompt_position(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt("  Finishing position (1 = winner)")? else {
                return Ok(None);
            };
            match line.parse::<u32>() {
                Ok(position) if position >= 1 => return Ok(Some(position)),
                _ => writeln!(self.output, "Enter a position of 1 or higher.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::models::{PlayerTier, Role};

    use super::*;

    fn run_script(lines: &[&str]) -> (Option<(PlayerProfile, CalculationResult)>, String) {
        let script = lines.join("\n");
        let mut driver = FormDriver::new(Cursor::new(script.into_bytes()), Vec::new());
        let outcome = driver.run().unwrap();
        let transcript = String::from_utf8(driver.output).unwrap();
        (outcome, transcript)
    }

    #[test]
    fn test_full_run_matches_reference_scenario() {
        let (outcome, transcript) = run_script(&[
            "s",       // start
            "Nobru",   // name
            "1",       // role RUSH1
            "y",       // captain
            "1000",    // kills
            "10",      // booyahs
            "1000000", // followers
            "100",     // engagement
            "4",       // toggle EWC
            "",        // leave competitions
            "EWC",     // title
            "1",       // title count
            "",        // end titles
            "",        // end participations
            "EWC",     // recent competition
            "i",       // in person
            "1",       // winner
            "",        // end recent
            "q",       // quit from result
        ]);

        let (profile, result) = outcome.unwrap();
        assert_eq!(profile.name, "Nobru");
        assert_eq!(profile.role, Role::Rush1);
        assert!(profile.is_captain);
        assert_eq!(profile.selected_competitions.len(), 1);
        assert_eq!(result.score, 72);
        assert_eq!(result.tier, PlayerTier::A);
        assert!(transcript.contains("Score:"));
        assert!(transcript.contains("72"));
    }

    #[test]
    fn test_help_then_quit() {
        let (outcome, transcript) = run_script(&["h", "", "q"]);
        assert!(outcome.is_none());
        assert!(transcript.contains("How scoring works"));
    }

    #[test]
    fn test_eof_mid_form_aborts() {
        let (outcome, _) = run_script(&["s", "Nobru"]);
        assert!(outcome.is_none());
    }

    #[test]
    fn test_name_required_before_advancing() {
        let (outcome, transcript) = run_script(&[
            "s", "", "Solo", // empty name rejected, then accepted
            "", "", "", // role default, not captain, kills default
            "", "", // followers, engagement defaults
            "", // no competitions
            "", "", // no titles, no participations
            "", // no recent results
            "q",
        ]);

        let (profile, result) = outcome.unwrap();
        assert_eq!(profile.name, "Solo");
        assert_eq!(result.breakdown.role_score, 12.0);
        assert!(transcript.contains("Player name is required."));
        assert!(transcript.contains("no competitions selected"));
    }

    #[test]
    fn test_custom_competition_flow() {
        let (outcome, _) = run_script(&[
            "s", "Solo", "", "", "", "", "", // identity through influence
            "c", "Liga Local", "o", "C", // add a custom competition
            "6", // toggle the custom entry (6th in the known list) back off
            "", // leave competitions
            "", "", "", // history and recent skipped
            "q",
        ]);

        let (profile, _) = outcome.unwrap();
        // Adding selects immediately; the toggle removed it again.
        assert!(profile.selected_competitions.is_empty());
    }

    #[test]
    fn test_invalid_numbers_reprompted() {
        let (outcome, transcript) = run_script(&[
            "s", "Solo", "1", "n", "abc", "250", // bad kill count retried
            "", "150", "42.5", // engagement out of range retried
            "", "", "", "", "q",
        ]);

        let (profile, _) = outcome.unwrap();
        assert_eq!(profile.official_kills, 250);
        assert!((profile.engagement - 42.5).abs() < 1e-9);
        assert!(transcript.contains("Enter a whole non-negative number."));
        assert!(transcript.contains("Enter a percentage between 0 and 100."));
    }

    #[test]
    fn test_restart_resets_profile() {
        let (outcome, _) = run_script(&[
            "s", "First", "", "", "", "", "", "", "", "", "", // straight to result
            "r", // restart
            "s", "Second", "", "", "", "", "", "", "", "", "", // again
            "q",
        ]);

        let (profile, _) = outcome.unwrap();
        assert_eq!(profile.name, "Second");
    }
}

use super::Policy;
use crate::gameplay::Action;
use crate::gameplay::Controller;
use crate::gameplay::Disposition;
use crate::gameplay::GameConfig;
use crate::gameplay::Phase;
use crate::gameplay::Player;
use crate::gameplay::Session;

/// Hard ceiling on actions per game. Policies are probabilistic, so the
/// bound is generous; hitting it means a stuck machine, not a slow one.
const STEP_LIMIT: usize = 100_000;

/// An unattended table: one AI policy per seat, driven to completion.
///
/// The table owns the clock, so it also plays the toss-up ticker and
/// polls every seat for a buzz between ticks.
pub struct Table {
    session: Session,
    policies: Vec<Policy>,
}

impl Table {
    /// Builds a table from a config whose seats are all AI-controlled.
    pub fn new(config: GameConfig, seed: u64) -> anyhow::Result<Self> {
        let policies = config
            .players
            .iter()
            .enumerate()
            .map(|(i, spec)| match spec.controller {
                Controller::Ai { skill } => Ok(Policy::seeded(skill, seed ^ i as u64)),
                Controller::Human => anyhow::bail!("seat {} is human; the table is AI-only", i),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let session = Session::seeded(config, seed)?;
        Ok(Self { session, policies })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Plays the game out and returns the final ledgers.
    pub fn run(&mut self) -> anyhow::Result<Vec<Player>> {
        for _ in 0..STEP_LIMIT {
            if self.session.phase().is_terminal() {
                return Ok(self.session.players().to_vec());
            }
            self.step()?;
        }
        anyhow::bail!("game did not terminate within {} actions", STEP_LIMIT)
    }

    /// One action against the session, chosen by the clock (toss-up) or
    /// the active seat's policy.
    pub fn step(&mut self) -> anyhow::Result<()> {
        let view = self.session.snapshot();
        let action = match view.phase {
            Phase::TossUp => {
                let buzzer = (0..self.policies.len())
                    .find(|seat| self.policies[*seat].wants_buzz(&view));
                match buzzer {
                    Some(seat) => Action::TossUpBuzz(seat),
                    None => Action::TossUpTick,
                }
            }
            _ => self.policies[view.active].act(&view),
        };
        log::debug!("seat {} plays {}", view.active, action);
        let outcome = self.session.act(action.clone());
        match outcome.disposition {
            Disposition::Accepted => Ok(()),
            // a dry ticker with no buzzer: force the strongest seat in
            Disposition::Ignored if action == Action::TossUpTick => {
                let seat = self.strongest_seat();
                anyhow::ensure!(
                    self.session.act(Action::TossUpBuzz(seat)).is_accepted(),
                    "forced buzz was refused"
                );
                Ok(())
            }
            other => anyhow::bail!(
                "policy action {} was {:?} in {}",
                action,
                other,
                view.phase
            ),
        }
    }

    fn strongest_seat(&self) -> usize {
        (0..self.policies.len())
            .max_by_key(|seat| self.policies[*seat].skill())
            .unwrap_or(0)
    }
}

//! The view-stack state machine.
//!
//! The navigator owns the context, builds the active view fresh on every activation and applies
//! the view's [`NavigationDecision`]. Going back at the root re-presents the root. Fetch
//! failures are shown on an error screen whose only entry goes back one level; dismissing that
//! screen at the root ends the session with [`Outcome::RootFailure`].

use std::io;

use lemmy_tui::{MenuRequest, SelectionSurface};
use log::{debug, info, warn};
use thiserror::Error;

use crate::context::{ContractViolation, NavigationContext};
use crate::gateway::{ContentGateway, FetchError};
use crate::view::{NavigationDecision, View, ViewError, ViewKind};

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input closed or the user dismissed a menu.
    Closed,
    /// The root view could not load its content.
    RootFailure(FetchError),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Closed => 0,
            Outcome::RootFailure(_) => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(Outcome),
}

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),
    #[error("terminal I/O failed: {0}")]
    Surface(#[from] io::Error),
}

impl NavigatorError {
    pub fn exit_code(&self) -> u8 {
        match self {
            NavigatorError::ContractViolation(_) => 2,
            NavigatorError::Surface(_) => 1,
        }
    }
}

pub struct Navigator<G, S> {
    context: NavigationContext,
    gateway: G,
    surface: S,
}

impl<G, S> Navigator<G, S>
where
    G: ContentGateway,
    S: SelectionSurface,
{
    pub fn new(context: NavigationContext, gateway: G, surface: S) -> Self {
        Self {
            context,
            gateway,
            surface,
        }
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn surface(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (NavigationContext, G, S) {
        (self.context, self.gateway, self.surface)
    }

    /// Activate the current view once and apply its decision.
    pub fn step(&mut self) -> Result<Step, NavigatorError> {
        let kind = self.context.current();
        let view = View::build(kind, &self.context)?;
        debug!("activating {kind} at depth {}", self.context.depth());

        match view.activate(&self.gateway, &mut self.surface) {
            Ok(NavigationDecision::Descend { next, patch }) => {
                debug!("{kind} -> {next}");
                self.context.descend(next, patch);
                Ok(Step::Continue)
            }
            Ok(NavigationDecision::Return) => Ok(self.pop()),
            Ok(NavigationDecision::Exit) => {
                info!("input closed in {kind}");
                Ok(Step::Finished(Outcome::Closed))
            }
            Err(ViewError::Surface(error)) => Err(NavigatorError::Surface(error)),
            Err(ViewError::Fetch(error)) => {
                warn!("{kind} failed to load: {error}");
                self.show_error(kind, &error)
            }
        }
    }

    /// Step until the session finishes.
    pub fn run(&mut self) -> Result<Outcome, NavigatorError> {
        loop {
            if let Step::Finished(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    fn pop(&mut self) -> Step {
        match self.context.pop() {
            Some(popped) => debug!("{popped} -> {}", self.context.current()),
            None => debug!("back at the root {}, re-presenting", self.context.current()),
        }
        Step::Continue
    }

    fn show_error(&mut self, kind: ViewKind, error: &FetchError) -> Result<Step, NavigatorError> {
        let title = format!("{kind} · could not load");
        let request =
            MenuRequest::new(title, vec!["← Back".to_string()]).with_status(error.to_string());
        let acknowledged = self.surface.select(&request)?.is_some();

        match (acknowledged, self.context.is_at_root()) {
            (true, _) => Ok(self.pop()),
            (false, true) => Ok(Step::Finished(Outcome::RootFailure(error.clone()))),
            (false, false) => Ok(Step::Finished(Outcome::Closed)),
        }
    }
}

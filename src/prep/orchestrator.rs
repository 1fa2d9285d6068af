//! Sequencing of one meeting preparation run
//!
//! Two searches, then four completion calls strictly one after another with
//! a rate-limit pause between them, then assembly. A failed completion call
//! aborts the run and discards everything generated so far.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info, Instrument};
use uuid::Uuid;

use crate::config::Settings;
use crate::llm::{self, prompts, CompletionProvider};
use crate::prep::brief::{GeneratedSections, MeetingBrief};
use crate::prep::limiter::{self, RateLimiter};
use crate::prep::request::{MeetingForm, MeetingRequest};
use crate::search::{self, SearchProvider};
use crate::{PrepError, Result};

/// Progress of a preparation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Searching,
    GeneratingCompanyAnalysis,
    GeneratingIndustryAnalysis,
    GeneratingStrategy,
    GeneratingBrief,
    Assembling,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Searching => "searching",
            Stage::GeneratingCompanyAnalysis => "generating company analysis",
            Stage::GeneratingIndustryAnalysis => "generating industry analysis",
            Stage::GeneratingStrategy => "generating strategy",
            Stage::GeneratingBrief => "generating brief",
            Stage::Assembling => "assembling",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Current stage of a single run, logging every transition.
struct Progress {
    stage: Stage,
}

impl Progress {
    fn new() -> Self {
        Self {
            stage: Stage::Validating,
        }
    }

    fn advance(&mut self, next: Stage) {
        info!(from = %self.stage, to = %next, "Stage transition");
        self.stage = next;
    }

    fn fail(&mut self) -> Stage {
        let failed_at = self.stage;
        error!(stage = %failed_at, "Meeting preparation failed");
        self.stage = Stage::Failed;
        failed_at
    }
}

/// Drives search and completion providers through a preparation run.
pub struct Orchestrator {
    llm: Arc<dyn CompletionProvider>,
    search: Arc<dyn SearchProvider>,
    limiter: Arc<dyn RateLimiter>,
}

impl Orchestrator {
    pub fn new(
        llm: Arc<dyn CompletionProvider>,
        search: Arc<dyn SearchProvider>,
        limiter: Arc<dyn RateLimiter>,
    ) -> Self {
        Self {
            llm,
            search,
            limiter,
        }
    }

    /// Build the production providers, failing upfront when a credential is missing.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let missing = settings.missing_keys();
        if !missing.is_empty() {
            return Err(PrepError::MissingKeys(missing));
        }

        let llm = llm::build_provider(settings).map_err(|e| PrepError::Config(e.to_string()))?;
        let search =
            search::build_provider(settings).map_err(|e| PrepError::Config(e.to_string()))?;

        Ok(Self::new(llm, search, limiter::from_settings(settings)))
    }

    /// Validate a raw form and, if it is well formed, prepare the brief.
    ///
    /// No provider is called for an invalid form.
    pub async fn run(&self, form: &MeetingForm) -> Result<MeetingBrief> {
        let request = form.validate().map_err(|e| {
            info!(stage = %Stage::Validating, error = %e, "Meeting request rejected");
            e
        })?;
        self.prepare(&request).await
    }

    /// Prepare the brief for an already validated request.
    pub async fn prepare(&self, request: &MeetingRequest) -> Result<MeetingBrief> {
        let span = tracing::info_span!(
            "prepare",
            request_id = %Uuid::new_v4(),
            company = %request.company_name
        );
        self.prepare_inner(request).instrument(span).await
    }

    async fn prepare_inner(&self, request: &MeetingRequest) -> Result<MeetingBrief> {
        let mut progress = Progress::new();
        info!("Starting meeting preparation");

        progress.advance(Stage::Searching);
        let company_info = search::search_or_placeholder(
            self.search.as_ref(),
            &search::company_query(&request.company_name),
        )
        .await;
        let industry_info = search::search_or_placeholder(
            self.search.as_ref(),
            &search::industry_query(&request.company_name),
        )
        .await;

        progress.advance(Stage::GeneratingCompanyAnalysis);
        let company_analysis = self
            .generate(
                &mut progress,
                &prompts::build_company_analysis_prompt(request, &company_info),
            )
            .await?;
        self.limiter.pause().await;

        progress.advance(Stage::GeneratingIndustryAnalysis);
        let industry_analysis = self
            .generate(
                &mut progress,
                &prompts::build_industry_analysis_prompt(request, &industry_info),
            )
            .await?;
        self.limiter.pause().await;

        progress.advance(Stage::GeneratingStrategy);
        let strategy = self
            .generate(&mut progress, &prompts::build_strategy_prompt(request))
            .await?;
        self.limiter.pause().await;

        progress.advance(Stage::GeneratingBrief);
        let brief = self
            .generate(&mut progress, &prompts::build_brief_prompt(request))
            .await?;

        progress.advance(Stage::Assembling);
        let sections = GeneratedSections {
            company_analysis,
            industry_analysis,
            strategy,
            brief,
        };
        let meeting_brief = MeetingBrief::assemble(&request.company_name, &sections);

        progress.advance(Stage::Done);
        info!(
            markdown_len = meeting_brief.markdown.len(),
            "Meeting preparation completed"
        );
        Ok(meeting_brief)
    }

    async fn generate(&self, progress: &mut Progress, prompt: &str) -> Result<String> {
        match self.llm.complete(prompt).await {
            Ok(text) => Ok(text),
            Err(source) => {
                error!(error = %source, "Completion call failed");
                let stage = progress.fail();
                Err(PrepError::Completion { stage, source })
            }
        }
    }
}

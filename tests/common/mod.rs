#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use meeting_prep::llm::{CompletionError, CompletionProvider};
use meeting_prep::prep::{MeetingForm, NoDelay, Orchestrator, RateLimiter};
use meeting_prep::search::{SearchError, SearchProvider};

pub fn run_meeting_prep(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_meeting-prep"))
            .args(args)
            // keep any developer .env out of the picture
            .current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("GROQ_API_KEY")
            .env_remove("SERPER_API_KEY")
            .env_remove("PORT")
            .env_remove("MEETING_PREP_DELAY_MS")
            .env_remove("RUST_LOG")
            .envs(vars.iter().copied())
            .output()
            .expect("failed to execute meeting-prep binary")
    }

    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }
}

/// Completion fake that replays scripted answers and records every prompt.
pub struct ScriptedLlm {
    answers: Vec<Result<String, u16>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn answering(answers: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            answers: answers.iter().map(|a| Ok(a.to_string())).collect(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Answers successfully until call number `failing_call` (1-based), which returns `status`.
    pub fn failing_on(failing_call: usize, status: u16) -> Arc<Self> {
        let answers = (1..=4)
            .map(|n| {
                if n == failing_call {
                    Err(status)
                } else {
                    Ok(format!("Section {}", n))
                }
            })
            .collect();
        Arc::new(Self {
            answers,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedLlm {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let mut prompts = self.prompts.lock().unwrap();
        let index = prompts.len();
        prompts.push(prompt.to_string());

        match self.answers.get(index) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(status)) => Err(CompletionError::Status {
                status: *status,
                body: "rate limited".to_string(),
            }),
            None => Err(CompletionError::EmptyResponse),
        }
    }
}

/// Search fake returning a fixed text, or failing every call.
pub struct FixedSearch {
    result: Option<String>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FixedSearch {
    pub fn returning(result: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Some(result.to_string()),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for FixedSearch {
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());

        match &self.result {
            Some(text) => Ok(text.clone()),
            None => Err(SearchError::Status {
                status: 401,
                body: "invalid api key".to_string(),
            }),
        }
    }
}

/// Limiter that never waits but records how many completion calls had
/// been made each time it was asked to pause.
pub struct CountingLimiter {
    llm: Arc<ScriptedLlm>,
    pauses: Mutex<Vec<usize>>,
}

impl CountingLimiter {
    pub fn watching(llm: Arc<ScriptedLlm>) -> Arc<Self> {
        Arc::new(Self {
            llm,
            pauses: Mutex::new(Vec::new()),
        })
    }

    /// Completion call count observed at each pause, in order.
    pub fn pauses(&self) -> Vec<usize> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateLimiter for CountingLimiter {
    async fn pause(&self) {
        self.pauses.lock().unwrap().push(self.llm.calls());
    }
}

pub fn orchestrator(llm: Arc<ScriptedLlm>, search: Arc<FixedSearch>) -> Orchestrator {
    Orchestrator::new(llm, search, Arc::new(NoDelay))
}

pub fn acme_form() -> MeetingForm {
    MeetingForm {
        company_name: Some("Acme".to_string()),
        meeting_objective: Some("Agree on a widget pilot".to_string()),
        attendees: Some("Jane Doe (CTO), John Roe (Procurement)".to_string()),
        meeting_duration: Some("45".to_string()),
        focus_areas: Some("pricing, delivery".to_string()),
    }
}

/// Scripted section answers matching the golden fixtures.
pub const GOLDEN_SECTIONS: [&str; 4] = [
    "Acme is a widget maker.\n\n- Founded in 1949\n- Based in Springfield",
    "## Trends\nDemand for widgets is rising.",
    "1. Intro (5 min)\n2. Demo (20 min)",
    "Close the pilot this quarter.",
];

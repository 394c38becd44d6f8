//! Host simulator: replays a timed button script through the engine and
//! the sample instrument, logging every callback.
//!
//! ```text
//! picochime-sim [--config engine.json] [script.txt]
//! ```
//!
//! Script lines are `<time_ms> <button> <down|up|fail>`.  `<button>` is a
//! label (`white`, `red`, `yellow`, `blue`, `grey`) or a 1-based index;
//! `fail` makes the button's pin unreadable.  `#` starts a comment.
//! Without a script path the script is read from stdin.

use std::io::Read;

use anyhow::{Context, Result, anyhow, bail};
use log::info;

use picochime::adapters::log_sink::{LogDisplay, LogRing, LogTone};
use picochime::app::controller::MusicController;
use picochime::app::wiring::{self, BUTTON_LABELS};
use picochime::config::EngineConfig;
use picochime::drivers::button::Button;
use picochime::drivers::sim_pin::SimPin;
use picochime::fsm::Fsm;

/// Latest accepted script time.  Leaves room for the settle period and
/// keeps timestamps inside the debouncer's wrapping range.
const MAX_SCRIPT_MS: u32 = u32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Down,
    Up,
    Fail,
}

#[derive(Debug, Clone, Copy)]
struct Step {
    at_ms: u32,
    button: usize,
    action: Action,
}

fn parse_button(s: &str) -> Option<usize> {
    BUTTON_LABELS.iter().position(|l| *l == s).or_else(|| {
        s.parse::<usize>()
            .ok()
            .filter(|i| (1..=BUTTON_LABELS.len()).contains(i))
            .map(|i| i - 1)
    })
}

fn parse_script(text: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (n, raw) in text.lines().enumerate() {
        let line_no = n + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[at, button, action] = fields.as_slice() else {
            bail!("line {line_no}: expected `<time_ms> <button> <down|up|fail>`");
        };

        let at_ms: u32 = at
            .parse()
            .with_context(|| format!("line {line_no}: bad time '{at}'"))?;
        if at_ms > MAX_SCRIPT_MS {
            bail!("line {line_no}: time {at_ms} is past {MAX_SCRIPT_MS}ms");
        }
        let button =
            parse_button(button).ok_or_else(|| anyhow!("line {line_no}: unknown button '{button}'"))?;
        let action = match action {
            "down" => Action::Down,
            "up" => Action::Up,
            "fail" => Action::Fail,
            other => bail!("line {line_no}: unknown action '{other}'"),
        };
        steps.push(Step {
            at_ms,
            button,
            action,
        });
    }
    // Stable: same-time steps keep script order.
    steps.sort_by_key(|s| s.at_ms);
    Ok(steps)
}

/// Last scripted step plus time for its edge to settle.
fn end_time_ms(steps: &[Step], debounce_ms: u32) -> Result<u32> {
    debounce_ms
        .checked_mul(4)
        .and_then(|settle| steps.last().map_or(0, |s| s.at_ms).checked_add(settle))
        .context("script end time overflows u32 milliseconds")
}

fn load_config(path: &str) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).map_err(|e| anyhow!("invalid config {path}: {e}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = EngineConfig {
        debug: true,
        ..EngineConfig::default()
    };
    let mut script_path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a path")?;
            config = load_config(&path)?;
        } else {
            script_path = Some(arg);
        }
    }
    config.validate()?;

    let text = match script_path {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let steps = parse_script(&text)?;

    let controller = MusicController::new(LogTone::new(), LogRing, Some(LogDisplay));
    let mut fsm = Fsm::new(controller, &config);
    let mut levels = Vec::new();
    for label in BUTTON_LABELS {
        let pin = SimPin::new(false);
        levels.push(pin.level());
        fsm.add_button(Button::new(pin, label).with_debounce_ms(config.debounce_ms))?;
    }
    wiring::add_transitions(&mut fsm)?;

    // Virtual time: run until every scripted edge has had time to settle.
    let end_ms = end_time_ms(&steps, config.debounce_ms)?;
    let mut pending = steps.iter().peekable();
    let mut now = 0;
    while now <= end_ms {
        while let Some(step) = pending.next_if(|s| s.at_ms <= now) {
            let level = &levels[step.button];
            match step.action {
                Action::Down => level.set(true),
                Action::Up => level.set(false),
                Action::Fail => level.fail(),
            }
        }
        fsm.tick(now)?;
        let Some(next) = now.checked_add(config.tick_interval_ms) else {
            break;
        };
        now = next;
    }

    info!(
        "SIM | {} ticks, final state {}, instrument {}",
        fsm.tick_count(),
        fsm.current_state(),
        fsm.host().instrument().name()
    );
    Ok(())
}

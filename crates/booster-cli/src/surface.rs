//! Terminal rendition of the booster card.

use std::io::Write;

use booster_core::{Booster, Detent, PresentationSurface, SurfaceResponse, ViewConfiguration};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

const CARD_WIDTH: usize = 56;

/// Points of custom-view height per terminal row.
const POINTS_PER_ROW: f64 = 40.0;

/// Tallest custom view drawn, in terminal rows.
const MAX_CUSTOM_ROWS: usize = 12;

/// Presents boosters on stdout and reads the answer from `input`.
///
/// An empty line (Enter) takes the primary action, `d` dismisses. End of
/// input means the surface went away and the presentation is abandoned.
pub struct TerminalSurface<R> {
    input: R,
    auto_response: Option<SurfaceResponse>,
}

impl TerminalSurface<BufReader<Stdin>> {
    pub fn stdin(auto_response: Option<SurfaceResponse>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), auto_response)
    }
}

impl<R: AsyncBufRead + Unpin> TerminalSurface<R> {
    pub fn new(input: R, auto_response: Option<SurfaceResponse>) -> Self {
        Self {
            input,
            auto_response,
        }
    }

    async fn read_response(&mut self, button_text: &str) -> Option<SurfaceResponse> {
        let mut line = String::new();
        loop {
            print!("[Enter] {button_text}   [d] Dismiss > ");
            let _ = std::io::stdout().flush();

            line.clear();
            match self.input.read_line(&mut line).await {
                Ok(0) => {
                    println!();
                    return None;
                }
                Ok(_) => {
                    if let Some(response) = parse_response(&line) {
                        return Some(response);
                    }
                    println!("Press Enter to continue or type 'd' to dismiss.");
                }
                Err(e) => {
                    tracing::warn!("failed to read answer: {e}");
                    return None;
                }
            }
        }
    }
}

impl<R: AsyncBufRead + Unpin> PresentationSurface for TerminalSurface<R> {
    async fn present(
        &mut self,
        booster: &Booster,
        config: Option<&ViewConfiguration>,
    ) -> Option<SurfaceResponse> {
        print!("{}", render_card(booster, config));
        let _ = std::io::stdout().flush();

        if let Some(response) = self.auto_response {
            tracing::debug!(?response, "answering booster automatically");
            return Some(response);
        }
        self.read_response(&booster.button_text).await
    }
}

pub fn parse_response(line: &str) -> Option<SurfaceResponse> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" | "ok" => Some(SurfaceResponse::PrimaryAction),
        "d" | "dismiss" | "x" | "q" => Some(SurfaceResponse::Dismissed),
        _ => None,
    }
}

/// Draw the card as plain text.
pub fn render_card(booster: &Booster, config: Option<&ViewConfiguration>) -> String {
    let rule = "-".repeat(CARD_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("+{rule}+\n"));
    push_line(&mut out, &format!("({})", booster.image_name));
    push_line(&mut out, "");
    push_line(&mut out, &booster.title);
    push_line(&mut out, "");
    for line in wrap(&booster.description, CARD_WIDTH - 2) {
        push_line(&mut out, &line);
    }

    let config = config.cloned().unwrap_or_default();
    if let Some(view) = &config.custom_view {
        let rows = custom_view_rows(config.custom_view_height);
        let mut lines: Vec<String> = view
            .text
            .lines()
            .enumerate()
            .map(|(i, text)| {
                if i == 0 {
                    format!("{}  {text}", view.icon)
                } else {
                    format!("    {text}")
                }
            })
            .collect();
        lines.resize(rows.max(lines.len()), String::new());

        push_line(&mut out, "");
        for line in &lines {
            push_line(&mut out, &format!("| {line}"));
        }
    }

    push_line(&mut out, "");
    push_line(&mut out, &format!("[ {} ]", booster.button_text));
    out.push_str(&format!("+{rule}+\n"));
    out.push_str(&format!(
        "  sizes: {}\n",
        describe_detents(&config.effective_detents())
    ));
    out
}

fn push_line(out: &mut String, text: &str) {
    out.push_str(&format!("| {text}\n"));
}

fn custom_view_rows(height: Option<f64>) -> usize {
    match height {
        Some(h) if h.is_finite() && h > 0.0 => {
            ((h / POINTS_PER_ROW).ceil() as usize).clamp(1, MAX_CUSTOM_ROWS)
        }
        _ => 1,
    }
}

fn describe_detents(detents: &[Detent]) -> String {
    detents
        .iter()
        .map(|d| match d {
            Detent::Medium => "medium".to_string(),
            Detent::Large => "large".to_string(),
            Detent::Height(h) => format!("{h}pt"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

//! Notification sinks
//!
//! `notify` has no error return. Every sink catches and logs its own
//! failures so that a broken audio device or missing notification daemon
//! can never stall or abort the monitoring loop.

use std::io::Write;
use std::process::{Command, Stdio};

use tremr_core::Alert;

/// Something that tells the user about a relevant earthquake
pub trait Notifier: Send + Sync {
    /// Sink name for logs
    fn name(&self) -> &str;

    /// Best-effort delivery; must return promptly
    fn notify(&self, alert: &Alert);
}

/// Writes alerts to the log. Always present so there is a record of every
/// alert even when the desktop channel fails.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    fn notify(&self, alert: &Alert) {
        tracing::warn!(
            identity = %alert.identity,
            magnitude = alert.magnitude,
            distance_km = alert.distance_km,
            "{}\n{}",
            alert.title,
            alert.body
        );
    }
}

/// Warning sound plus desktop popup through the platform's own tools
#[derive(Debug)]
pub struct DesktopNotifier {
    sound_enabled: bool,
}

impl DesktopNotifier {
    pub fn new(sound_enabled: bool) -> Self {
        Self { sound_enabled }
    }

    fn play_warning_sound(&self) {
        if !self.sound_enabled {
            return;
        }

        let result = match std::env::consts::OS {
            "macos" => run_detached("afplay", &["/System/Library/Sounds/Sosumi.aiff"]),
            "windows" => run_detached(
                "powershell",
                &["-NoProfile", "-Command", "[System.Media.SystemSounds]::Hand.Play()"],
            ),
            _ => run_detached(
                "paplay",
                &["/usr/share/sounds/freedesktop/stereo/alarm-clock-elapsed.oga"],
            ),
        };

        match result {
            Ok(()) => tracing::info!(os = std::env::consts::OS, "played warning sound"),
            Err(e) => {
                tracing::warn!(error = %e, "could not play sound, falling back to terminal bell");
                let mut stderr = std::io::stderr();
                let _ = stderr.write_all(b"\x07\x07\x07");
                let _ = stderr.flush();
            }
        }
    }

    fn show_popup(&self, alert: &Alert) {
        let result = match std::env::consts::OS {
            "macos" => {
                let script = format!(
                    "display notification \"{}\" with title \"{}\"",
                    applescript_escape(&alert.body),
                    applescript_escape(&alert.title)
                );
                run_detached("osascript", &["-e", &script])
            }
            "windows" => {
                let script = format!(
                    "Add-Type -AssemblyName System.Windows.Forms; Add-Type -AssemblyName System.Drawing; \
                     $n = New-Object System.Windows.Forms.NotifyIcon; \
                     $n.Icon = [System.Drawing.SystemIcons]::Warning; $n.Visible = $true; \
                     $n.ShowBalloonTip(15000, '{}', '{}', 'Warning'); Start-Sleep -Seconds 15; $n.Dispose()",
                    powershell_escape(&alert.title),
                    powershell_escape(&alert.body)
                );
                run_detached("powershell", &["-NoProfile", "-Command", &script])
            }
            _ => run_detached(
                "notify-send",
                &[
                    "--urgency=critical",
                    "--expire-time=15000",
                    "--app-name=Earthquake Alert",
                    &alert.title,
                    &alert.body,
                ],
            ),
        };

        match result {
            Ok(()) => tracing::info!(title = %alert.title, "notification sent"),
            Err(e) => tracing::error!(error = %e, "error showing notification"),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn name(&self) -> &str {
        "desktop"
    }

    fn notify(&self, alert: &Alert) {
        self.play_warning_sound();
        self.show_popup(alert);
    }
}

/// Spawn a helper without waiting on it; a reaper thread collects the exit
/// status so the loop never blocks on a hung child.
fn run_detached(program: &str, args: &[&str]) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let program = program.to_string();
    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::warn!(program = %program, %status, "notification helper failed")
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(program = %program, error = %e, "notification helper lost"),
    });
    Ok(())
}

fn applescript_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Single-quoted PowerShell literal: only the quote itself needs doubling
fn powershell_escape(text: &str) -> String {
    text.replace('\'', "''")
}

/// Fans each alert out to every registered sink, in registration order
#[derive(Default)]
pub struct NotifierSet {
    sinks: Vec<Box<dyn Notifier>>,
}

impl NotifierSet {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Log sink plus desktop sink
    pub fn desktop(sound_enabled: bool) -> Self {
        let mut set = Self::new();
        set.register(Box::new(LogNotifier));
        set.register(Box::new(DesktopNotifier::new(sound_enabled)));
        set
    }

    pub fn register(&mut self, sink: Box<dyn Notifier>) {
        self.sinks.push(sink);
    }

    pub fn names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Notifier for NotifierSet {
    fn name(&self) -> &str {
        "set"
    }

    fn notify(&self, alert: &Alert) {
        for sink in &self.sinks {
            tracing::debug!(sink = sink.name(), identity = %alert.identity, "dispatching alert");
            sink.notify(alert);
        }
    }
}

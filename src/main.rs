use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use drift::animation::FrameDriver;
use drift::floating::{self, FloatingSimulator, FloatingStyle, FloatingSurface};
use drift::geometry::{LayoutProbe, Rect};
use drift::input::{PointerButtons, PointerEvent};
use drift::list::ListReconciler;
use drift::options::Options;
use drift::shell::{Interpreter, ShellContext, TerminalLog};
use drift::transition::{self, FadeTransition, PortalTransition, ProxySurface};
use drift::util::frame_timing::FrameClock;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Instant;

#[derive(Parser)]
#[command(name = "drift")]
#[command(about = "Run a scripted motion scenario headless and log every frame", long_about = None)]
struct Cli {
    /// Options preset (TOML)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Simulated display refresh rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to run
    #[arg(long, default_value_t = 240)]
    frames: u32,

    /// Seed for the drift sampler
    #[arg(long)]
    seed: Option<u64>,

    /// Shell commands, submitted one every 30 frames
    #[arg(short, long = "command")]
    commands: Vec<String>,
}

/// Surface that logs the outer transform every frame.
struct LogSurface;

impl FloatingSurface for LogSurface {
    fn apply(&mut self, style: &FloatingStyle) {
        log::trace!("floating: {}", style.outer_transform());
    }
}

/// Proxy that logs its placement.
struct LogProxy;

impl ProxySurface for LogProxy {
    fn place(&mut self, rect: &Rect) {
        log::trace!("proxy: {rect:?}");
    }

    fn remove(&mut self) {
        log::info!("proxy removed");
    }
}

/// Document pane whose height grows while its content "loads".
#[derive(Clone)]
struct LoadingPane(Rc<Cell<Rect>>);

impl LayoutProbe for LoadingPane {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.0.get())
    }
}

#[derive(Default)]
struct Host {
    list: Option<Vec<String>>,
    opened: Option<String>,
}

impl ShellContext for Host {
    fn location_changed(&mut self, location: &str) {
        log::info!("location: {location}");
    }

    fn view_file(&mut self, path: Option<&str>) {
        self.opened = path.map(str::to_owned);
    }

    fn show_list(&mut self, items: &[String]) {
        self.list = Some(items.to_vec());
    }

    fn hide_list(&mut self) {
        self.list = Some(Vec::new());
    }
}

const CARD: Rect = Rect::new(40.0, 40.0, 240.0, 120.0);
const LIST_ORIGIN: Rect = Rect::new(100.0, 50.0, 0.0, 0.0);

fn pointer_script(frame: u32) -> Option<PointerEvent> {
    let center = CARD.center();
    match frame {
        30 => Some(PointerEvent::Enter),
        31..=59 | 76..=119 => Some(PointerEvent::Move {
            position: center + Vec2::new(frame as f32 - 60.0, 10.0),
            buttons: PointerButtons::NONE,
        }),
        60 => Some(PointerEvent::Down {
            position: center + Vec2::new(80.0, -40.0),
        }),
        75 => Some(PointerEvent::Up),
        120 => Some(PointerEvent::Leave),
        _ => None,
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let options = match &cli.options {
        Some(path) => match Options::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };
    let commands = if cli.commands.is_empty() {
        ["help", "test", "cd docs", "cat readme.md", "list hide"]
            .map(str::to_owned)
            .to_vec()
    } else {
        cli.commands.clone()
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}, {} frames at {} fps", cli.frames, cli.fps);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut clock = FrameClock::fixed(Instant::now(), cli.fps);
    let mut driver = FrameDriver::new();

    let simulator =
        Rc::new(RefCell::new(FloatingSimulator::new(options.floating.clone())));
    let floating =
        floating::mount(&mut driver, &simulator, LogSurface, clock.now(), &mut rng);

    let mut shell = Interpreter::new(Host::default());
    let mut terminal = TerminalLog::new();
    terminal.system("drift headless runner");
    let mut list = ListReconciler::new(options.list.clone());
    let mut fades: Vec<(u64, FadeTransition)> = Vec::new();

    let portal = Rc::new(RefCell::new(PortalTransition::new(
        options.transitions.portal_duration(),
    )
    .with_reveal(options.transitions.reveal_duration())));
    let pane = LoadingPane(Rc::new(Cell::new(Rect::default())));
    let mut portal_handle: Option<transition::PortalHandle> = None;

    for frame in 1..=cli.frames {
        let now = clock.tick();

        if frame % 30 == 1 {
            if let Some(command) = commands.get((frame / 30) as usize) {
                let before = terminal.entries().len();
                let _ = terminal.submit(&mut shell, command);
                for entry in &terminal.entries()[before..] {
                    log::info!("[{:?}] {}", entry.kind, entry.content);
                    if let Some(config) = entry.fade() {
                        let mut fade = FadeTransition::new(config);
                        fade.activate(now);
                        fades.push((entry.id, fade));
                    }
                }
            }
        }

        if let Some(items) = shell.context_mut().list.take() {
            list.update(items, now);
            for shown in list.display_items() {
                log::debug!(
                    "{:?} #{} {} ({:?})",
                    shown.lifecycle,
                    shown.index,
                    shown.item,
                    shown.transition.delay
                );
            }
        }
        for key in list.tick(now) {
            log::info!("list purged {key}");
        }

        if let Some(file) = shell.context_mut().opened.take() {
            log::info!("opening {file}");
            pane.0.set(Rect::new(200.0, 50.0, 300.0, 0.0));
            portal_handle = transition::launch(
                &mut driver,
                &portal,
                LIST_ORIGIN,
                pane.clone(),
                LogProxy,
                now,
            );
        }
        // Content arrives over a few frames and the pane grows.
        let mut rect = pane.0.get();
        if rect.height < 400.0 {
            rect.height = (rect.height + 40.0).min(400.0);
            pane.0.set(rect);
        }

        if let Some(event) = pointer_script(frame) {
            simulator.borrow_mut().handle_pointer(event, &CARD);
        }

        let _ = driver.tick(now);

        fades.retain_mut(|(id, fade)| {
            if fade.poll(now) {
                log::debug!("log entry {id} faded in");
                false
            } else {
                true
            }
        });
        if portal.borrow().content_visible(now) && portal_handle.is_some() {
            let style = portal.borrow().content_style(now);
            log::trace!("content: {} {}", style.opacity, style.transform_css());
        }
    }

    floating.cancel();
    log::info!(
        "done after {} frames: {} log entries, {} list items ({:?} first), location {}",
        clock.frames(),
        terminal.entries().len(),
        list.items().len(),
        list.items().first().and_then(|key| list.tag(key)),
        shell.location()
    );
    log::info!("portal state {:?}, loops still armed: {}", portal.borrow().state(), driver.pending());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_script_gesture_order() {
        assert_eq!(pointer_script(30), Some(PointerEvent::Enter));
        assert!(matches!(pointer_script(60), Some(PointerEvent::Down { .. })));
        assert_eq!(pointer_script(75), Some(PointerEvent::Up));
        assert_eq!(pointer_script(120), Some(PointerEvent::Leave));
        assert_eq!(pointer_script(10), None);
    }

    #[test]
    fn test_reopening_a_file_supersedes_the_portal_run() {
        let mut driver = FrameDriver::new();
        let portal = Rc::new(RefCell::new(PortalTransition::default()));
        let pane = LoadingPane(Rc::new(Cell::new(Rect::new(
            200.0, 50.0, 300.0, 400.0,
        ))));
        let start = Instant::now();
        let mut portal_handle: Option<transition::PortalHandle> = None;
        for _ in 0..2 {
            portal_handle = transition::launch(
                &mut driver,
                &portal,
                LIST_ORIGIN,
                pane.clone(),
                LogProxy,
                start,
            );
        }
        let handle = portal_handle.unwrap();
        assert_eq!(portal.borrow().current_run(), Some(handle.run()));
        assert_eq!(driver.pending(), 1);
    }
}

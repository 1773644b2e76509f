use std::cell::RefCell;
use std::error::Error;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use kurbo::{ParamCurve, PathEl, Point, QuadBez};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::Paragraph;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};

use digit_morph::driver::{AnimationSpec, Driver, DriverState};
use digit_morph::path::Metrics;
use digit_morph::{Easing, Symbol, sequence_for};

const TRANSITION: Duration = Duration::from_millis(400);

/// Line segments per quadratic when flattening for the canvas.
const FLATTEN_STEPS: usize = 16;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run();

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn run() -> Result<(), Box<dyn Error>> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let metrics = Metrics::default();

    // The render surface's copy of the morph state. The driver is its only
    // writer and replaces it wholesale each tick.
    let current: Rc<RefCell<Vec<Point>>> =
        Rc::new(RefCell::new(sequence_for(Symbol::Nothing)?.to_vec()));
    let sink_frame = Rc::clone(&current);
    let mut driver = Driver::new(move |frame| *sink_frame.borrow_mut() = frame);

    // The digit currently shown (None while blank) and the last digit,
    // so `a` can bring it back after a disappearance.
    let mut shown: Option<u8> = None;
    let mut last_digit: u8 = 0;
    let mut debug_overlay = false;
    let mut prev_state = DriverState::Idle;

    loop {
        let state = driver.tick(Instant::now());

        if state == DriverState::Completed && prev_state != DriverState::Completed {
            log::debug!("transition settled on {shown:?}");
        }
        prev_state = state;

        terminal.draw(|f| ui(f, &current.borrow(), &metrics, debug_overlay))?;

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,

            KeyCode::Char('d') => debug_overlay = !debug_overlay,

            KeyCode::Char('a') => match shown {
                Some(digit) => {
                    driver.start(
                        AnimationSpec::appearance(digit, false, TRANSITION, Easing::default())?,
                        Instant::now(),
                    )?;
                    last_digit = digit;
                    shown = None;
                }
                None => {
                    driver.start(
                        AnimationSpec::appearance(last_digit, true, TRANSITION, Easing::default())?,
                        Instant::now(),
                    )?;
                    shown = Some(last_digit);
                }
            },

            KeyCode::Char(c @ '0'..='9') => {
                let digit = c as u8 - b'0';
                show_digit(&mut driver, &mut shown, digit)?;
            }

            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                let digit = shown.map_or(0, |d| (d + 1) % 10);
                show_digit(&mut driver, &mut shown, digit)?;
            }

            _ => continue,
        }
    }

    Ok(())
}

fn show_digit(
    driver: &mut Driver,
    shown: &mut Option<u8>,
    digit: u8,
) -> Result<(), Box<dyn Error>> {
    let spec = match *shown {
        Some(from) => AnimationSpec::digit_transition(from, digit, TRANSITION, Easing::default())?,
        None => AnimationSpec::appearance(digit, true, TRANSITION, Easing::default())?,
    };

    driver.start(spec, Instant::now())?;
    *shown = Some(digit);

    Ok(())
}

fn ui(f: &mut Frame, points: &[Point], metrics: &Metrics, debug_overlay: bool) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(f.area());

    f.render_widget(
        Paragraph::new("digit-morph  [0-9/space morph]  [a appear/disappear]  [d debug]  [q quit]")
            .style(Style::new().fg(Color::DarkGray)),
        chunks[0],
    );

    let area = chunks[1];

    // Braille canvas: 2x4 dots per cell, roughly square dots.
    let width = f64::from(area.width) * 2.0;
    let height = f64::from(area.height) * 4.0;

    if width < 1.0 || height < 1.0 {
        return;
    }

    // Constrain the glyph box to the fixed aspect ratio and center it;
    // the library only supplies the ratio, sizing is the host's job.
    let mut box_h = height;
    let mut box_w = box_h * metrics.aspect_ratio();

    if box_w > width {
        box_w = width;
        box_h = box_w / metrics.aspect_ratio();
    }

    let offset = ((width - box_w) / 2.0, (height - box_h) / 2.0);
    let transform = metrics.viewport_transform(box_h);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| draw_glyph(ctx, points, transform, offset, height, debug_overlay));

    f.render_widget(canvas, area);
}

/// Draw the glyph path (and optionally its control-point overlay) onto the
/// canvas. The viewport transform maps glyph units to y-down box pixels;
/// the canvas itself is y-up, hence the final flip.
fn draw_glyph(
    ctx: &mut Context,
    points: &[Point],
    transform: kurbo::Affine,
    offset: (f64, f64),
    height: f64,
    debug_overlay: bool,
) {
    let Ok(path) = digit_morph::path::build(points) else {
        return;
    };

    let to_canvas = |p: Point| (offset.0 + p.x, height - (offset.1 + p.y));

    let path = transform * path;
    let mut cursor = Point::ZERO;

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => cursor = p,
            PathEl::QuadTo(c, e) => {
                let quad = QuadBez::new(cursor, c, e);
                let mut prev = to_canvas(cursor);

                for step in 1..=FLATTEN_STEPS {
                    let next = to_canvas(quad.eval(step as f64 / FLATTEN_STEPS as f64));
                    ctx.draw(&CanvasLine {
                        x1: prev.0,
                        y1: prev.1,
                        x2: next.0,
                        y2: next.1,
                        color: Color::White,
                    });
                    prev = next;
                }

                cursor = e;
            }
            _ => {}
        }
    }

    if debug_overlay {
        draw_overlay(ctx, points, transform, offset, height);
    }
}

/// Numbered on-curve points plus the path's bounding box.
fn draw_overlay(
    ctx: &mut Context,
    points: &[Point],
    transform: kurbo::Affine,
    offset: (f64, f64),
    height: f64,
) {
    let Ok(path) = digit_morph::path::build(points) else {
        return;
    };

    let to_canvas = |p: Point| (offset.0 + p.x, height - (offset.1 + p.y));

    let bbox = digit_morph::path::bounds(&(transform * path));
    let (x0, y0) = to_canvas(Point::new(bbox.x0, bbox.y0));
    let (x1, y1) = to_canvas(Point::new(bbox.x1, bbox.y1));

    for (ax, ay, bx, by) in [
        (x0, y0, x1, y0),
        (x1, y0, x1, y1),
        (x1, y1, x0, y1),
        (x0, y1, x0, y0),
    ] {
        ctx.draw(&CanvasLine {
            x1: ax,
            y1: ay,
            x2: bx,
            y2: by,
            color: Color::Blue,
        });
    }

    ctx.layer();

    let (ax, ay) = to_canvas(transform * points[0]);
    ctx.print(ax, ay, Span::styled("0", Style::new().fg(Color::Blue)));

    for (n, pair) in points[1..].chunks_exact(2).enumerate() {
        let (px, py) = to_canvas(transform * pair[1]);
        ctx.print(
            px,
            py,
            Span::styled((n + 1).to_string(), Style::new().fg(Color::Blue)),
        );
    }
}

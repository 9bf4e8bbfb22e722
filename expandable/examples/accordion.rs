use std::cell::Cell;
use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use expandable::{
    ChildId, Constraints, ExpansionConfig, ExpansionController, ExpansionEvent, Host, LayoutParams,
    Size,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// One child block of the accordion.
struct Row {
    id: ChildId,
    lines: Vec<String>,
    params: LayoutParams,
    visible: bool,
    /// Height from the last layout pass.
    height: u16,
}

/// Stacks rows top to bottom in the terminal.
struct TermHost {
    rows: Vec<Row>,
    height: u16,
}

impl TermHost {
    fn row(&self, child: &ChildId) -> Option<&Row> {
        self.rows.iter().find(|r| &r.id == child)
    }

    fn row_mut(&mut self, child: &ChildId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| &r.id == child)
    }

    fn layout(&mut self) {
        let mut remaining = self.height.saturating_sub(1);
        for row in &mut self.rows {
            let wanted = if !row.visible {
                0
            } else {
                match row.params.height {
                    Size::Fixed(h) => h,
                    _ => row.lines.len() as u16,
                }
            };
            row.height = wanted.min(remaining);
            remaining -= row.height;
        }
    }

    fn draw(&self, out: &mut impl Write, status: &str) -> io::Result<()> {
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
        let mut y = 0;
        for row in &self.rows {
            for line in row.lines.iter().take(row.height as usize) {
                queue!(out, cursor::MoveTo(0, y), Print(line))?;
                y += 1;
            }
        }
        queue!(out, cursor::MoveTo(0, self.height.saturating_sub(1)), Print(status))?;
        out.flush()
    }
}

impl Host for TermHost {
    fn measure(&mut self, child: &ChildId, params: LayoutParams, constraints: Constraints) -> u16 {
        let natural = self.row(child).map_or(0, |r| r.lines.len() as u16);
        let height = match params.height {
            Size::Fixed(h) => h,
            _ => natural,
        };
        height.min(constraints.height)
    }

    fn rendered_size(&self, child: &ChildId) -> u16 {
        self.row(child).map_or(0, |r| if r.visible { r.height } else { 0 })
    }

    fn set_visible(&mut self, child: &ChildId, visible: bool) {
        if let Some(row) = self.row_mut(child) {
            row.visible = visible;
        }
    }

    fn apply_layout(&mut self, child: &ChildId, params: LayoutParams) {
        if let Some(row) = self.row_mut(child) {
            row.params = params;
        }
    }
}

fn block(id: &str, title: &str, body: usize) -> Row {
    let mut lines = vec![format!("  {}", title)];
    lines.extend((1..=body).map(|n| format!("    {} line {}", id, n)));
    Row {
        id: ChildId::new(id),
        lines,
        params: LayoutParams::default(),
        visible: true,
        height: 0,
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("accordion.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut header = block("header", "[space] toggle  [r] reduced motion  [q] quit", 0);
    header.params = LayoutParams::fixed(1);
    let mut host = TermHost {
        rows: vec![
            header,
            block("details", "Details", 4),
            block("notes", "Notes", 2),
            block("history", "History", 6),
        ],
        height,
    };

    let mut controller = ExpansionController::new(ExpansionConfig::default());
    controller.on_measure(Constraints::new(width, height));
    let attach: Vec<(ChildId, bool, LayoutParams)> = host
        .rows
        .iter()
        .map(|r| (r.id.clone(), r.id.as_str() != "header", r.params))
        .collect();
    for (id, expandable, params) in attach {
        controller.attach(&mut host, id, expandable, params);
    }

    let progress = Rc::new(Cell::new(0.0_f32));
    let sink = Rc::clone(&progress);
    controller.set_progress_listener(move |p| sink.set(p));

    loop {
        host.layout();
        let status = format!(
            "{:?}  open {:>3.0}%  reduced motion: {}",
            controller.state(),
            progress.get() * 100.0,
            controller.reduced_motion()
        );
        host.draw(stdout, &status)?;

        let timeout = if controller.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Enter => controller.toggle(&mut host),
                    KeyCode::Char('r') => {
                        let enabled = !controller.reduced_motion();
                        controller.set_reduced_motion(enabled);
                    }
                    _ => {}
                },
                Event::Resize(w, h) => {
                    host.height = h;
                    controller.cancel();
                    controller.on_measure(Constraints::new(w, h));
                }
                _ => {}
            }
        }

        controller.tick(&mut host, Instant::now());
        for event in controller.drain_events() {
            if let ExpansionEvent::Completed { group, canceled } = event {
                log::info!("group {} done (canceled: {})", group, canceled);
            }
        }
    }
}

//! Main application logic for the terminal user interface.
//!
//! `App` is a thin shell around [`TodoState`]: key presses become
//! [`Action`]s, the state produces the next state, and rendering reads the
//! result. The only things `App` owns itself are screen concerns such as
//! focus, list selection, the input cursor and the picker cursors.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::action::Action;
use crate::emoji::EmojiPicker;
use crate::fields::format_theme;
use crate::keyboard::{VirtualKeyboard, ROWS};
use crate::state::TodoState;
use crate::text::truncate;
use crate::tui::{
    colors::{Palette, HEART_RED},
    enums::{AppState, Focus},
    input::InputField,
    utils::centered_rect,
};

const EMOJI_CELL_WIDTH: u16 = 4;
const EMOJI_PANEL_HEIGHT: u16 = 7;

/// Main application state for the terminal user interface.
pub struct App {
    state: TodoState,
    app_state: AppState,
    focus: Focus,
    input: InputField,
    task_list_state: ListState,
    picker: EmojiPicker,
    picker_columns: usize,
    keyboard: VirtualKeyboard,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Create an App around an initial state.
    pub fn new(state: TodoState) -> Self {
        let input = InputField::with_value(state.input().text());
        let mut app = App {
            state,
            app_state: AppState::Main,
            focus: Focus::Input,
            input,
            task_list_state: ListState::default(),
            picker: EmojiPicker::new(),
            picker_columns: 8,
            keyboard: VirtualKeyboard::new(),
            status_message: String::new(),
            should_quit: false,
        };
        app.clamp_selection();
        app
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn into_state(self) -> TodoState {
        self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn selected(&self) -> Option<usize> {
        self.task_list_state.selected()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply an action to the state and bring screen bookkeeping in line.
    fn dispatch(&mut self, action: Action) {
        let now = Local::now().naive_local();
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(&action, now);

        if self.state.input().text() != self.input.value {
            self.input.reset_to(self.state.input().text());
        }
        if !self.state.view().emoji_picker_open && self.focus == Focus::EmojiPicker {
            self.focus = Focus::Input;
        }
        if !self.state.view().keyboard_open && self.focus == Focus::Keyboard {
            self.focus = Focus::Input;
        }
        self.clamp_selection();
    }

    /// Edit the input field, then let the state correct the result.
    fn edit_input(&mut self, edit: impl FnOnce(&mut InputField)) {
        let mut draft = self.input.clone();
        edit(&mut draft);
        if draft.value == self.input.value {
            self.input.cursor = draft.cursor;
            return;
        }
        let state = std::mem::take(&mut self.state);
        self.state = state.set_input_text(&draft.value);
        if self.state.input().was_corrected() {
            self.set_status_message(format!("Corrected to '{}'", self.state.input().text()));
        }
        draft.sync_corrected(self.state.input().text());
        self.input = draft;
    }

    /// Keep the list selection on an existing row.
    fn clamp_selection(&mut self) {
        let len = self.state.tasks().len();
        let selected = match (len, self.task_list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.task_list_state.select(selected);
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    fn add_from_input(&mut self) {
        let before = self.state.tasks().len();
        self.dispatch(Action::Add);
        if self.state.tasks().len() > before {
            self.task_list_state.select(Some(self.state.tasks().len() - 1));
            self.set_status_message("Task added".to_string());
        }
    }

    fn delete_selected(&mut self) {
        if let Some(index) = self.task_list_state.selected() {
            let text = self
                .state
                .tasks()
                .get(index)
                .map(|t| truncate(&t.text, 40))
                .unwrap_or_default();
            self.dispatch(Action::Delete { index });
            self.set_status_message(format!("Deleted '{}' (Ctrl+Z to undo)", text));
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(index) = self.task_list_state.selected() {
            self.dispatch(Action::Toggle { index });
        }
    }

    fn undo(&mut self) {
        if self.state.can_undo() {
            self.dispatch(Action::Undo);
            self.task_list_state.select(Some(self.state.tasks().len() - 1));
            self.set_status_message("Restored last deleted task".to_string());
        } else {
            self.set_status_message("Nothing to undo".to_string());
        }
    }

    fn toggle_emoji_picker(&mut self) {
        self.dispatch(Action::ToggleEmojiPicker);
        if self.state.view().emoji_picker_open {
            self.picker.reset();
            self.focus = Focus::EmojiPicker;
        }
    }

    fn toggle_keyboard(&mut self) {
        self.dispatch(Action::ToggleKeyboard);
        if self.state.view().keyboard_open {
            self.focus = Focus::Keyboard;
        }
    }

    fn cycle_focus(&mut self) {
        let mut order = vec![Focus::Input, Focus::Tasks];
        if self.state.view().emoji_picker_open {
            order.push(Focus::EmojiPicker);
        }
        if self.state.view().keyboard_open {
            order.push(Focus::Keyboard);
        }
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    /// Handle one key press. Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        self.clear_status_message();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return true;
                },
                KeyCode::Char('z') => {
                    self.undo();
                    return false;
                },
                _ => {}
            }
        }

        if self.app_state == AppState::Help {
            self.app_state = AppState::Main;
            return false;
        }

        match key.code {
            KeyCode::F(1) => {
                self.app_state = AppState::Help;
                return false;
            },
            KeyCode::F(2) => {
                self.toggle_emoji_picker();
                return false;
            },
            KeyCode::F(3) => {
                self.toggle_keyboard();
                return false;
            },
            KeyCode::F(4) => {
                self.dispatch(Action::ToggleTheme);
                self.set_status_message(format!(
                    "Theme: {}",
                    format_theme(self.state.view().theme)
                ));
                return false;
            },
            KeyCode::Tab => {
                self.cycle_focus();
                return false;
            },
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Tasks => self.handle_task_list_key(key),
            Focus::EmojiPicker => self.handle_picker_key(key),
            Focus::Keyboard => self.handle_keyboard_key(key),
        }
        self.should_quit
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_from_input(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_input(|field| field.handle_char(c))
            },
            KeyCode::Backspace => self.edit_input(InputField::handle_backspace),
            KeyCode::Delete => self.edit_input(InputField::handle_delete),
            KeyCode::Left => self.edit_input(InputField::move_cursor_left),
            KeyCode::Right => self.edit_input(InputField::move_cursor_right),
            KeyCode::Home => self.edit_input(InputField::move_home),
            KeyCode::End => self.edit_input(InputField::move_end),
            KeyCode::Esc | KeyCode::Down => self.focus = Focus::Tasks,
            _ => {}
        }
    }

    fn handle_task_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(i) = self.task_list_state.selected() {
                    if i > 0 {
                        self.task_list_state.select(Some(i - 1));
                    } else {
                        self.focus = Focus::Input;
                    }
                } else {
                    self.focus = Focus::Input;
                }
            },
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(i) = self.task_list_state.selected() {
                    if i + 1 < self.state.tasks().len() {
                        self.task_list_state.select(Some(i + 1));
                    }
                }
            },
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('i') | KeyCode::Char('a') => self.focus = Focus::Input,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => match self.picker.current() {
                Some(emoji) => {
                    self.dispatch(Action::InsertEmoji { emoji: emoji.glyph.to_string() });
                    self.picker.reset();
                    self.focus = Focus::Input;
                },
                None => self.set_status_message("No emoji matches".to_string()),
            },
            KeyCode::Esc => self.dispatch(Action::ToggleEmojiPicker),
            KeyCode::Left => self.picker.move_left(),
            KeyCode::Right => self.picker.move_right(),
            KeyCode::Up => self.picker.move_up(self.picker_columns),
            KeyCode::Down => self.picker.move_down(self.picker_columns),
            KeyCode::Backspace => self.picker.pop_query(),
            KeyCode::Char(c) => self.picker.push_query(c),
            _ => {}
        }
    }

    fn handle_keyboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let text = self.keyboard.current().to_string();
                self.dispatch(Action::Append { text });
            },
            KeyCode::Esc => self.dispatch(Action::ToggleKeyboard),
            KeyCode::Left => self.keyboard.move_left(),
            KeyCode::Right => self.keyboard.move_right(),
            KeyCode::Up => self.keyboard.move_up(),
            KeyCode::Down => self.keyboard.move_down(),
            _ => {}
        }
    }

    /// Poll for a key press and handle it.
    fn handle_events(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    fn render_title(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let title = Paragraph::new(Line::from(Span::styled(
            "To Do List",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM))
        .style(Style::default().bg(palette.background).fg(palette.text));
        f.render_widget(title, area);
    }

    fn render_input_row(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let theme = self.state.view().theme;
        let buttons = format!(
            "[Enter] Add  [F2] 😊  [F3] ABC  [F4] {}",
            theme.switch_label()
        );
        let buttons_width = Span::raw(buttons.as_str()).width() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14),
                Constraint::Min(10),
                Constraint::Length(buttons_width),
            ])
            .split(area);

        let panel_style = Style::default().bg(palette.panel).fg(palette.panel_text);
        let label = Paragraph::new("Enter Text")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(panel_style);
        f.render_widget(label, chunks[0]);

        let border_style = if self.focus == Focus::Input {
            Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let content = if self.input.value.is_empty() {
            Line::from(Span::styled("Enter Text", Style::default().fg(palette.muted)))
        } else {
            Line::from(self.input.value.as_str())
        };
        let input = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .style(Style::default().bg(palette.input).fg(palette.panel_text));
        f.render_widget(input, chunks[1]);

        if self.focus == Focus::Input && self.app_state == AppState::Main {
            let offset = Span::raw(self.input.before_cursor()).width() as u16;
            let max_x = chunks[1].x + chunks[1].width.saturating_sub(2);
            let x = (chunks[1].x + 1 + offset).min(max_x);
            f.set_cursor_position((x, chunks[1].y + 1));
        }

        let hints = Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(panel_style);
        f.render_widget(hints, chunks[2]);
    }

    fn render_emoji_picker(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let focused = self.focus == Focus::EmojiPicker;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Emoji | search: {}", self.picker.query))
            .border_style(if focused {
                Style::default().fg(palette.highlight)
            } else {
                Style::default()
            });
        let inner = block.inner(area);
        f.render_widget(
            block.style(Style::default().bg(palette.panel).fg(palette.panel_text)),
            area,
        );

        let columns = (inner.width / EMOJI_CELL_WIDTH).max(1) as usize;
        self.picker_columns = columns;
        let matches = self.picker.matches();
        if matches.is_empty() {
            f.render_widget(
                Paragraph::new(Span::styled("No emoji matches", Style::default().fg(palette.muted))),
                inner,
            );
            return;
        }

        let visible_rows = inner.height.max(1) as usize;
        let selected_row = self.picker.selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        let lines: Vec<Line> = matches
            .chunks(columns)
            .enumerate()
            .skip(first_row)
            .take(visible_rows)
            .map(|(row, chunk)| {
                let spans: Vec<Span> = chunk
                    .iter()
                    .enumerate()
                    .map(|(col, emoji)| {
                        let cell = format!(" {} ", emoji.glyph);
                        if focused && row * columns + col == self.picker.selected {
                            Span::styled(cell, Style::default().bg(palette.highlight))
                        } else {
                            Span::raw(cell)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn render_keyboard(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let focused = self.focus == Focus::Keyboard;
        let lines: Vec<Line> = ROWS
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let spans: Vec<Span> = row
                    .iter()
                    .enumerate()
                    .map(|(c, key)| {
                        let cell = format!(" {} ", key);
                        if focused && self.keyboard.row == r && self.keyboard.col == c {
                            Span::styled(
                                cell,
                                Style::default().bg(palette.highlight).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::raw(cell)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let keyboard = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Keyboard")
                    .border_style(if focused {
                        Style::default().fg(palette.highlight)
                    } else {
                        Style::default()
                    }),
            )
            .style(Style::default().bg(palette.panel).fg(palette.panel_text));
        f.render_widget(keyboard, area);
    }

    fn render_task_list(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let focused = self.focus == Focus::Tasks;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Tasks ({})", self.state.tasks().len()))
            .border_style(if focused {
                Style::default().fg(palette.highlight)
            } else {
                Style::default()
            });

        if self.state.tasks().is_empty() {
            let empty = Paragraph::new(Span::styled(
                "Nothing to do. Type a task and press Enter.",
                Style::default().fg(palette.muted),
            ))
            .block(block)
            .style(Style::default().bg(palette.background).fg(palette.text));
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .tasks()
            .iter()
            .map(|task| {
                let style = if task.completed {
                    Style::default().fg(palette.muted).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(palette.panel_text)
                };
                let mark = if task.completed { "[x] " } else { "[ ] " };
                ListItem::new(Line::from(vec![
                    Span::raw(mark),
                    Span::styled(task.text.as_str(), style),
                ]))
                .style(Style::default().bg(palette.panel))
            })
            .collect();

        let highlight = if focused {
            Style::default().bg(palette.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .style(Style::default().bg(palette.background).fg(palette.text))
            .highlight_style(highlight)
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.task_list_state);
    }

    fn render_undo_bar(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let depth = self.state.undo_stack().len();
        let style = if depth > 0 {
            Style::default().bg(palette.panel).fg(palette.panel_text)
        } else {
            Style::default().bg(palette.background).fg(palette.muted)
        };
        let undo = Paragraph::new(format!(" ↶ Undo [Ctrl+Z]  ({} deleted) ", depth)).style(style);
        f.render_widget(undo, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let footer = Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Made with "),
                Span::styled("❤", Style::default().fg(HEART_RED)),
                Span::raw(" in the terminal"),
            ]),
            Line::from("© Emoji Todo List"),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.background).fg(palette.muted));
        f.render_widget(footer, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Anywhere:", bold)),
            Line::from("  Tab          Move focus (input, tasks, open panels)"),
            Line::from("  F2           Emoji picker"),
            Line::from("  F3           On-screen keyboard"),
            Line::from("  F4           Light/dark theme"),
            Line::from("  Ctrl+Z       Undo last delete"),
            Line::from("  F1           This help"),
            Line::from("  Ctrl+C       Quit"),
            Line::from(""),
            Line::from(Span::styled("Input:", bold)),
            Line::from("  Enter        Add task"),
            Line::from("  Esc/Down     Go to task list"),
            Line::from(""),
            Line::from(Span::styled("Task list:", bold)),
            Line::from("  ↑/↓, k/j     Select task"),
            Line::from("  Space/x      Toggle done"),
            Line::from("  d/Delete     Delete task"),
            Line::from("  u            Undo last delete"),
            Line::from("  i/a          Back to input"),
            Line::from("  q/Esc        Quit"),
            Line::from(""),
            Line::from(Span::styled("Emoji picker / keyboard:", bold)),
            Line::from("  Arrows       Move"),
            Line::from("  Enter        Insert"),
            Line::from("  Type         Search emoji by name"),
            Line::from("  Esc          Close"),
        ];

        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);
        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press any key to return"),
            )
            .style(Style::default().bg(palette.panel).fg(palette.panel_text))
            .wrap(Wrap { trim: false });
        f.render_widget(help, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let hint = match self.focus {
                Focus::Input => "Enter: add",
                Focus::Tasks => "Space: toggle  d: delete  u: undo",
                Focus::EmojiPicker => "Enter: insert  Esc: close",
                Focus::Keyboard => "Enter: type key  Esc: close",
            };
            format!("[{}] {} | F1 help", self.focus.label(), hint)
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(palette.highlight).fg(palette.text))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function.
    pub fn render(&mut self, f: &mut Frame) {
        let view = *self.state.view();
        let palette = Palette::for_theme(view.theme);
        let area = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            area,
        );

        let mut constraints = vec![Constraint::Length(2), Constraint::Length(3)];
        if view.emoji_picker_open {
            constraints.push(Constraint::Length(EMOJI_PANEL_HEIGHT));
        }
        if view.keyboard_open {
            constraints.push(Constraint::Length(ROWS.len() as u16 + 2));
        }
        constraints.extend([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ]);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut next = 0;
        let mut take = || {
            let rect = chunks[next];
            next += 1;
            rect
        };

        let title_area = take();
        let input_area = take();
        let picker_area = view.emoji_picker_open.then(&mut take);
        let keyboard_area = view.keyboard_open.then(&mut take);
        let list_area = take();
        let undo_area = take();
        let footer_area = take();
        let status_area = take();

        self.render_title(f, title_area, &palette);
        self.render_input_row(f, input_area, &palette);
        if let Some(rect) = picker_area {
            self.render_emoji_picker(f, rect, &palette);
        }
        if let Some(rect) = keyboard_area {
            self.render_keyboard(f, rect, &palette);
        }
        self.render_task_list(f, list_area, &palette);
        self.render_undo_bar(f, undo_area, &palette);
        self.render_footer(f, footer_area, &palette);
        self.render_status_bar(f, status_area, &palette);

        if self.app_state == AppState::Help {
            self.render_help(f, area, &palette);
        }
    }

    /// Main event loop for the TUI application.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("event=ui_start tasks={}", self.state.tasks().len());
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_events()? {
                debug!("event=ui_quit_requested");
                break;
            }
        }
        Ok(())
    }
}

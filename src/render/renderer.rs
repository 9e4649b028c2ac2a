use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, GameEngine, RandomSource};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R: RandomSource>(
        &self,
        frame: &mut Frame,
        engine: &GameEngine<R>,
        metrics: &GameMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(engine, metrics, paused), chunks[0]);
        frame.render_widget(self.render_grid(engine), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid<R: RandomSource>(&self, engine: &GameEngine<R>) -> Paragraph<'static> {
        let grid = engine.grid();
        let snake = engine.snake();
        let head = snake.head();
        let food = engine.food();

        let mut lines = Vec::with_capacity(grid.height());
        for y in 0..grid.height() {
            let mut spans = Vec::with_capacity(grid.width());

            for x in 0..grid.width() {
                let cell = Cell::new(x as i32, y as i32);

                let span = if cell == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snake.contains(cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Rgb(93, 216, 228)))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats<R: RandomSource>(
        &self,
        engine: &GameEngine<R>,
        metrics: &GameMetrics,
        paused: bool,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Score: ", label),
            Span::styled(
                engine.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(engine.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Rounds: ", label),
            Span::styled(metrics.rounds_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ];
        if paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Esc/R", Style::default().fg(Color::Green)),
            Span::raw(" reset | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, SequenceRng};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_draws_snake_and_food() {
        let engine =
            GameEngine::new(GameConfig::small(), SequenceRng::new(vec![3, 1, 1])).unwrap();
        let metrics = GameMetrics::new();
        let renderer = Renderer::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

        terminal
            .draw(|frame| renderer.render(frame, &engine, &metrics, true))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(content.contains('■'));
        assert!(content.contains('●'));
        assert!(content.contains("PAUSED"));
    }
}

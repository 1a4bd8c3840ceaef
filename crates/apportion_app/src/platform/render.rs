use apportion_core::{AppViewModel, SeatCellView};
use apportion_engine::{quotient, Allocation};

/// Seat cells per grid row.
const GRID_COLUMNS: usize = 4;
/// Shown in a seat cell nobody holds yet.
const PLACEHOLDER: &str = "_";

/// Text lines for the interactive session view.
pub(crate) fn render_view(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("Seats: {} (max {})", view.seat_budget, view.max_seats)];

    if view.candidates.is_empty() {
        lines.push("  no candidates yet; use: add NAME VOTES".to_string());
    }
    let width = name_width(view.candidates.iter().map(|row| row.name.as_str()));
    for row in &view.candidates {
        let seats = match row.seats {
            Some(seats) => seat_label(seats),
            None => "-".to_string(),
        };
        lines.push(format!(
            "  {:<width$}  {:>10} votes  {}",
            row.name,
            row.votes,
            seats,
            width = width
        ));
    }

    lines.extend(render_grid(&view.seat_cells));

    if let Some(error) = &view.error {
        lines.push(format!("error: {error}"));
    }
    if let Some(notice) = &view.notice {
        lines.push(format!("rejected: {notice}"));
    }
    lines
}

/// Text lines for a one-shot allocation, including each candidate's quotient
/// for the next seat.
pub(crate) fn render_allocation(allocation: &Allocation) -> Vec<String> {
    let seat_count = allocation.award_sequence.len();
    let mut lines = vec![format!("Seats: {seat_count}")];

    let width = name_width(allocation.seats.iter().map(|entry| entry.name.as_str()));
    for entry in &allocation.seats {
        lines.push(format!(
            "  {:<width$}  {:>10} votes  {:<9}  next quotient {:.2}",
            entry.name,
            entry.votes,
            seat_label(entry.seats),
            quotient(entry.votes, entry.seats),
            width = width
        ));
    }

    let cells: Vec<SeatCellView> = allocation
        .award_sequence
        .iter()
        .map(|name| SeatCellView::Filled(name.clone()))
        .collect();
    lines.extend(render_grid(&cells));
    lines.push(format!("Award order: {}", allocation.award_sequence.join(", ")));
    lines
}

fn render_grid(cells: &[SeatCellView]) -> Vec<String> {
    let width = name_width(cells.iter().map(|cell| match cell {
        SeatCellView::Filled(name) => name.as_str(),
        SeatCellView::Empty => PLACEHOLDER,
    }));

    cells
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| {
            let rendered: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let label = match cell {
                        SeatCellView::Filled(name) => name.as_str(),
                        SeatCellView::Empty => PLACEHOLDER,
                    };
                    let number = row * GRID_COLUMNS + col + 1;
                    format!("[{number:>2}] {label:<width$}")
                })
                .collect();
            format!("  {}", rendered.join("  ").trim_end())
        })
        .collect()
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|name| name.chars().count()).max().unwrap_or(0)
}

fn seat_label(seats: u32) -> String {
    if seats == 1 {
        "1 seat".to_string()
    } else {
        format!("{seats} seats")
    }
}

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "stamp" => Colour::Green,
        "correct" => Colour::Yellow,
        "export" | "backup" => Colour::Blue,
        "init" | "seed" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        other if other.ends_with("_del") => Colour::Red,
        other if other.ends_with("_add") || other.ends_with("_edit") => Colour::Cyan,
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `operation (target)`, cut to the column width on visible text.
    fn label(&self) -> String {
        let plain = if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        };

        let visible = if plain.chars().count() > MAX_OP_WIDTH {
            let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            plain
        };

        let color = color_for_operation(&self.operation);
        match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible.as_str()).to_string(),
        }
    }
}

/// Reader of the internal `log` table.
pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool, limit: Option<usize>) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log
             ORDER BY id DESC LIMIT ?1",
        )?;

        let limit: i64 = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map([limit], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        entries.reverse();
        Ok(entries)
    }

    pub fn render(entries: &[LogEntry]) -> String {
        let labels: Vec<String> = entries.iter().map(LogEntry::label).collect();

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = labels
            .iter()
            .map(|l| strip_ansi(l).chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (e, label) in entries.iter().zip(&labels) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(label).chars().count()));
            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                e.id, e.date, label, padding, e.message
            ));
        }
        out
    }

    pub fn print_log(pool: &DbPool, limit: Option<usize>) -> AppResult<()> {
        let entries = Self::load(pool, limit)?;
        println!("📜 Internal log:\n");
        print!("{}", Self::render(&entries));
        Ok(())
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod component;
mod component_form;
mod component_page;
mod dispatcher;
mod post_editor;
mod post_list;
mod session_store;
mod session_view;

pub use app::{draft_post, run_session};

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::buffer::Buffer;
    use unicode_width::UnicodeWidthStr;

    /// Collects the symbols of each buffer row, skipping the tails of wide cells.
    pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                let mut line = String::new();
                let mut skip = 0;
                for x in area.left()..area.right() {
                    if skip > 0 {
                        skip -= 1;
                        continue;
                    }
                    let symbol = buf[(x, y)].symbol();
                    skip = symbol.width().saturating_sub(1);
                    line.push_str(symbol);
                }
                line
            })
            .collect()
    }
}

//! ASCII rendering of a position on the fixed per-size board templates.
//!
//! Template placeholders: an uppercase letter is a cell, `@1k`/`@2k`/`@3k` is
//! left-diagonal, right-diagonal and horizontal ley-line `k`. Claimed cells and
//! captured lines print as the owner's digit, uncaptured lines as `@`.

use std::fmt;

use crate::board::Board;
use crate::state::GameState;
use crate::types::{Family, Owner};

const TEMPLATE_1: &str = r"                  @11   @10
                 /   /
            @30 - A - B
                 \ / \
              @31 - C   @21
                   \
                    @20";

const TEMPLATE_2: &str = r"                    @12   @11
                   /   /
              @30 - A - B   @10
                 / \ / \ /
            @31 - C - D - E
                 \ / \ / \
              @32 - F - G   @22
                   \   \
                    @20   @21";

const TEMPLATE_3: &str = r"                    @13   @12
                   /   /
              @30 - A - B   @11
                 / \ / \ /
            @31 - C - D - E   @10
               / \ / \ / \ /
          @32 - F - G - H - I
               \ / \ / \ / \
            @33 - J - K - L   @23
                \    \    \
                 @20    @21    @22";

const TEMPLATE_4: &str = r"                    @14   @13
                   /   /
              @30 - A - B   @12
                 / \ / \ /
            @31 - C - D - E   @11
               / \ / \ / \ /
          @32 - F - G - H - I   @10
             / \ / \ / \ / \ /
        @33 - J - K - L - M - N
             \ / \ / \ / \ / \
          @34 - O - P - Q - R   @24
                \   \   \   \
                 @20   @21   @22   @23";

const TEMPLATE_5: &str = r"                    @15   @14
                   /   /
              @30 - A - B   @13
                 / \ / \ /
            @31 - C - D - E   @12
               / \ / \ / \ /
          @32 - F - G - H - I   @11
             / \ / \ / \ / \ /
        @33 - J - K - L - M - N   @10
           / \ / \ / \ / \ / \ /
      @34 - O - P - Q - R - S - T
           \ / \ / \ / \ / \ / \
        @35 - U - V - W - X - Y   @25
             \   \   \   \   \
              @20   @21   @22   @23   @24";

#[inline]
fn template(size: u8) -> &'static str {
    match size {
        1 => TEMPLATE_1,
        2 => TEMPLATE_2,
        3 => TEMPLATE_3,
        4 => TEMPLATE_4,
        _ => TEMPLATE_5,
    }
}

#[inline]
fn tag_char(tag: Option<Owner>) -> char {
    tag.map_or('@', Owner::digit)
}

/// Render `board` on its size's template.
pub fn render(board: &Board) -> String {
    let tpl = template(board.size());
    let mut out = String::with_capacity(tpl.len());
    let mut chars = tpl.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            'A'..='Z' => {
                let idx = c as u8 - b'A';
                out.push(board.get(idx).map_or(c, Owner::digit));
            }
            '@' => {
                let family = match chars.peek() {
                    Some('1') => Family::LeftDiagonal,
                    Some('2') => Family::RightDiagonal,
                    Some('3') => Family::Horizontal,
                    _ => {
                        out.push(c);
                        continue;
                    }
                };
                chars.next();
                let idx = chars.next().and_then(|d| d.to_digit(10)).unwrap_or(0) as usize;
                out.push(tag_char(board.line(family, idx)));
            }
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

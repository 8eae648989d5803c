//! Button bar layout.
//!
//! When every page fits, every page gets a button. Otherwise the bar is a
//! window of exactly `num_buttons` slots around the active page, where
//! collapsed runs of pages are replaced by a single ellipsis that jumps into
//! the middle of the hidden run.
//!
//! The left and right sides are not mirror images: the outer run sizes
//! differ, and only the left jump target gets the even-count correction.

use super::*;

pub(crate) fn build(
  page: usize,
  num_pages: usize,
  num_buttons: usize,
) -> Vec<Button> {
  if num_pages == 0 {
    return Vec::new();
  }

  let page = page.clamp(1, num_pages);
  let num_buttons = num_buttons.max(1);

  if num_pages <= num_buttons {
    full(page, num_pages)
  } else {
    partial(page, num_pages, num_buttons)
  }
}

fn consecutive(pages: Range<usize>) -> impl Iterator<Item = Button> {
  pages.map(|page| Button::Page {
    active: false,
    page,
  })
}

fn full(page: usize, num_pages: usize) -> Vec<Button> {
  (1..=num_pages)
    .map(|index| Button::Page {
      active: index == page,
      page: index,
    })
    .collect()
}

fn partial(page: usize, num_pages: usize, num_buttons: usize) -> Vec<Button> {
  let half = num_buttons / 2;

  let (slots_left, slots_right) = if page <= half {
    let left = page - 1;
    (left, num_buttons - left - 1)
  } else if page >= num_pages - half {
    let right = num_pages - page;
    (num_buttons - right - 1, right)
  } else if num_buttons.is_multiple_of(2) {
    (half - 1, half)
  } else {
    (half, half)
  };

  let pages_before = page - 1;
  let pages_after = num_pages - page;

  let mut buttons = Vec::with_capacity(num_buttons);

  if pages_before <= slots_left {
    buttons.extend(consecutive(1..page));
  } else if slots_left > 0 {
    let outer = if slots_left == 2 {
      2
    } else {
      slots_left.div_ceil(2)
    };

    let inner = slots_left - outer;

    let mut target = pages_before.div_ceil(2);

    if pages_before.is_multiple_of(2) {
      target += 1;
    }

    buttons.extend(consecutive(1..outer));
    buttons.push(Button::Ellipsis { page: target });
    buttons.extend(consecutive(page - inner..page));
  }

  buttons.push(Button::Page { active: true, page });

  if pages_after <= slots_right {
    buttons.extend(consecutive(page + 1..num_pages + 1));
  } else if slots_right > 0 {
    let split = if slots_right == 2 {
      1
    } else {
      slots_right / 2 + 1
    };

    let tail = slots_right - split;

    buttons.extend(consecutive(page + 1..page + split));
    buttons.push(Button::Ellipsis {
      page: page + pages_after.div_ceil(2),
    });
    buttons.extend(consecutive(num_pages - tail + 1..num_pages + 1));
  }

  buttons
}

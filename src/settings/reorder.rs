// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Move the element at `from` to index `to`; everything else keeps its relative order.
/// Out-of-range indices leave the list unchanged.
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= list.len() || to >= list.len() {
        return false;
    }
    let item = list.remove(from);
    list.insert(to, item);
    true
}

/// Drop `active` onto the position currently held by `over`.
pub fn move_by_identity<T: PartialEq>(list: &mut Vec<T>, active: &T, over: &T) -> bool {
    if active == over {
        return false;
    }
    let (Some(from), Some(to)) = (
        list.iter().position(|x| x == active),
        list.iter().position(|x| x == over),
    ) else {
        return false;
    };
    move_item(list, from, to)
}

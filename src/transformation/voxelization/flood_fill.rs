use ndarray::Array3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CellState {
    Undefined,
    Shell,
    OutsideToWalk,
    Outside,
}

// Avoid striding too far in each direction to stay in L1 cache as much as possible.
const WALK_DISTANCE: usize = 64;

/// Computes the solid enclosed by the occupied cells of `cells`.
///
/// Every empty cell connected (through the 6 face neighbors) to an empty cell on the
/// boundary of the grid stays empty. All the other cells are occupied in the result.
pub(crate) fn fill_interior(cells: &Array3<bool>) -> Array3<bool> {
    let (ni, nj, nk) = cells.dim();

    if ni == 0 || nj == 0 || nk == 0 {
        return cells.clone();
    }

    // Row-major buffer, the last axis is contiguous.
    let mut data: Vec<_> = cells
        .iter()
        .map(|occupied| {
            if *occupied {
                CellState::Shell
            } else {
                CellState::Undefined
            }
        })
        .collect();
    let index = |i: usize, j: usize, k: usize| (i * nj + j) * nk + k;

    mark_outside(&mut data, &index, [0, 0, 0], [1, nj, nk]);
    mark_outside(&mut data, &index, [ni - 1, 0, 0], [ni, nj, nk]);
    mark_outside(&mut data, &index, [0, 0, 0], [ni, 1, nk]);
    mark_outside(&mut data, &index, [0, nj - 1, 0], [ni, nj, nk]);
    mark_outside(&mut data, &index, [0, 0, 0], [ni, nj, 1]);
    mark_outside(&mut data, &index, [0, 0, nk - 1], [ni, nj, nk]);

    let num_outside = fill_outside(&mut data, [ni, nj, nk]);
    log::debug!(
        "flood fill walked {} outside cells out of {}",
        num_outside,
        data.len()
    );

    Array3::from_shape_fn((ni, nj, nk), |(i, j, k)| {
        data[index(i, j, k)] != CellState::Outside
    })
}

/// Marks all the undefined cells within the given bounds as outside cells to walk.
fn mark_outside(
    data: &mut [CellState],
    index: &impl Fn(usize, usize, usize) -> usize,
    start: [usize; 3],
    end: [usize; 3],
) {
    for i in start[0]..end[0] {
        for j in start[1]..end[1] {
            for k in start[2]..end[2] {
                let cell = &mut data[index(i, j, k)];

                if *cell == CellState::Undefined {
                    *cell = CellState::OutsideToWalk;
                }
            }
        }
    }
}

fn walk_forward(start: isize, end: isize, mut ptr: isize, out: &mut [CellState], stride: isize) {
    let mut i = start;
    let mut count = 0;

    while count < WALK_DISTANCE && i < end && out[ptr as usize] == CellState::Undefined {
        out[ptr as usize] = CellState::OutsideToWalk;
        i += 1;
        ptr += stride;
        count += 1;
    }
}

fn walk_backward(start: isize, end: isize, mut ptr: isize, out: &mut [CellState], stride: isize) {
    let mut i = start;
    let mut count = 0;

    while count < WALK_DISTANCE && i >= end && out[ptr as usize] == CellState::Undefined {
        out[ptr as usize] = CellState::OutsideToWalk;
        i -= 1;
        ptr -= stride;
        count += 1;
    }
}

/// Propagates the outside cells through the undefined cells until a fixed point is reached.
///
/// The grid is swept in memory order repeatedly. Each cell to walk becomes an outside cell
/// and marks a bounded run of undefined cells along each axis in both directions. This
/// keeps the working set small and needs no explicit queue, unlike a breadth-first search.
fn fill_outside(data: &mut [CellState], dims: [usize; 3]) -> usize {
    let [ni, nj, nk] = dims;
    let istride = (nj * nk) as isize;
    let jstride = nk as isize;
    let kstride = 1;
    let mut total = 0;

    loop {
        let mut cells_walked = 0;

        for i in 0..ni {
            for j in 0..nj {
                for k in 0..nk {
                    let idx = (i * nj + j) * nk + k;

                    if data[idx] != CellState::OutsideToWalk {
                        continue;
                    }

                    cells_walked += 1;
                    data[idx] = CellState::Outside;
                    let idx = idx as isize;
                    let (i, j, k) = (i as isize, j as isize, k as isize);

                    walk_forward(k + 1, nk as isize, idx + kstride, data, kstride);
                    walk_backward(k - 1, 0, idx - kstride, data, kstride);
                    walk_forward(j + 1, nj as isize, idx + jstride, data, jstride);
                    walk_backward(j - 1, 0, idx - jstride, data, jstride);
                    walk_forward(i + 1, ni as isize, idx + istride, data, istride);
                    walk_backward(i - 1, 0, idx - istride, data, istride);
                }
            }
        }

        total += cells_walked;

        if cells_walked == 0 {
            return total;
        }
    }
}

//! Static descriptions and complexity classes for each algorithm.

use serde::Serialize;

use super::Algorithm;

/// Time complexity in the best, average and worst case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Display metadata for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time: Complexity,
    pub space: &'static str,
}

const BUBBLE: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    description: "Bubble Sort is a simple sorting algorithm that repeatedly steps through \
        the list, compares adjacent elements and swaps them if they are in the wrong order.",
    time: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
};

const SELECTION: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    description: "Selection Sort divides the input list into two parts: a sorted sublist \
        and an unsorted sublist. It repeatedly selects the smallest element from the \
        unsorted sublist and moves it to the sorted sublist.",
    time: Complexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
};

const INSERTION: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    description: "Insertion Sort builds the final sorted array one item at a time by \
        repeatedly taking the next item and inserting it into the correct position in \
        the already sorted part.",
    time: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
};

const MERGE: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    description: "Merge Sort is a divide-and-conquer algorithm that divides the input \
        array into two halves, sorts each half recursively, and then merges the two \
        sorted halves.",
    time: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space: "O(n)",
};

const QUICK: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    description: "Quick Sort is a divide-and-conquer algorithm that selects a 'pivot' \
        element and partitions the array around the pivot, placing smaller elements \
        before it and larger elements after it.",
    time: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space: "O(log n)",
};

pub(super) fn lookup(algorithm: Algorithm) -> &'static AlgorithmInfo {
    match algorithm {
        Algorithm::Bubble => &BUBBLE,
        Algorithm::Selection => &SELECTION,
        Algorithm::Insertion => &INSERTION,
        Algorithm::Merge => &MERGE,
        Algorithm::Quick => &QUICK,
    }
}

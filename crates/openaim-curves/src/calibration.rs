//! Shipped stick-response calibration data.
//!
//! The knot grid and the per-axis outputs below were calibrated externally
//! against reference hardware. They are data, not a formula: the evaluator
//! must reproduce every knot verbatim, so the constants are kept exactly as
//! calibrated and are never derived at runtime.
//!
//! The grid is evenly spaced at 200/73 input units; the region between the
//! last knot and the top of the domain is covered by the evaluator's
//! full-scale segment, not by an extra knot.

/// Number of calibrated knots per axis.
pub(crate) const KNOT_COUNT: usize = 35;

/// Raw-input positions shared by both axis calibrations.
pub(crate) const KNOT_INPUTS: [f64; KNOT_COUNT] = [
    4.109589041, 6.849315068, 9.589041096, 12.32876712, 15.06849315,
    17.80821918, 20.54794521, 23.28767123, 26.02739726, 28.76712329,
    31.50684932, 34.24657534, 36.98630137, 39.7260274, 42.46575342,
    45.20547945, 47.94520548, 50.68493151, 53.42465753, 56.16438356,
    58.90410959, 61.64383562, 64.38356164, 67.12328767, 69.8630137,
    72.60273973, 75.34246575, 78.08219178, 80.82191781, 83.56164384,
    86.30136986, 89.04109589, 91.78082192, 94.52054795, 97.26027397,
];

/// Shaped outputs for the horizontal (turn) axis.
pub(crate) const TURN_OUTPUTS: [f64; KNOT_COUNT] = [
    0.006498581106, 0.01079688388, 0.0152762469, 0.02009211719, 0.02538589227,
    0.03133758862, 0.03812320917, 0.04586507636, 0.05483206264, 0.06498803302,
    0.07658435503, 0.0900202977, 0.1050284181, 0.1220418272, 0.1411820883,
    0.1628917728, 0.1865012616, 0.212862971, 0.2413386541, 0.2703169443,
    0.3015639166, 0.336835443, 0.3670344828, 0.4035792826, 0.4458033171,
    0.4866852001, 0.5276097948, 0.5727014463, 0.622165069, 0.6715457413,
    0.7253645904, 0.7785254535, 0.8395646001, 0.9016671185, 0.9634322954,
];

/// Shaped outputs for the vertical (look-up) axis.
pub(crate) const LOOK_UP_OUTPUTS: [f64; KNOT_COUNT] = [
    0.006258930096, 0.01040934973, 0.01470324358, 0.01936120531, 0.02447423441,
    0.03019137823, 0.03667623285, 0.04422503016, 0.05270127119, 0.06265743073,
    0.07391096726, 0.08681291288, 0.1013975833, 0.1176818451, 0.1358759266,
    0.1566929134, 0.1793716199, 0.2055178519, 0.2310116086, 0.2598395822,
    0.2888243832, 0.322603057, 0.3555385401, 0.3899776036, 0.4307359307,
    0.4683927371, 0.5041621426, 0.5580929487, 0.5991397849, 0.6326067212,
    0.7103518613, 0.7546045504, 0.8056680162, 0.8822039265, 0.928047968,
];

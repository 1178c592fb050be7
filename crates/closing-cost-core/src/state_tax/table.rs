//! Canonical per-state figures.
//!
//! Property tax: average effective annual rate on owner-occupied homes.
//! Transfer tax: combined statutory rate on the sale price (buyer and seller
//! shares summed, common county surcharges included where they apply statewide
//! or to the dominant county). Recording fees: representative flat charge for
//! recording a deed and mortgage.

use rust_decimal_macros::dec;

use super::StateTaxRates;

/// Sorted by code so lookups can binary search.
pub(super) static STATE_TAX_TABLE: [StateTaxRates; 51] = [
    StateTaxRates {
        code: "AK",
        name: "Alaska",
        property_tax_rate_percent: dec!(1.04),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(60),
    },
    StateTaxRates {
        code: "AL",
        name: "Alabama",
        property_tax_rate_percent: dec!(0.40),
        transfer_tax_rate_percent: dec!(0.10),
        recording_fees: dec!(75),
    },
    StateTaxRates {
        code: "AR",
        name: "Arkansas",
        property_tax_rate_percent: dec!(0.62),
        transfer_tax_rate_percent: dec!(0.33),
        recording_fees: dec!(45),
    },
    StateTaxRates {
        code: "AZ",
        name: "Arizona",
        property_tax_rate_percent: dec!(0.62),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(30),
    },
    StateTaxRates {
        code: "CA",
        name: "California",
        property_tax_rate_percent: dec!(0.75),
        transfer_tax_rate_percent: dec!(0.11),
        recording_fees: dec!(150),
    },
    StateTaxRates {
        code: "CO",
        name: "Colorado",
        property_tax_rate_percent: dec!(0.51),
        transfer_tax_rate_percent: dec!(0.01),
        recording_fees: dec!(80),
    },
    StateTaxRates {
        code: "CT",
        name: "Connecticut",
        property_tax_rate_percent: dec!(1.79),
        transfer_tax_rate_percent: dec!(1.25),
        recording_fees: dec!(160),
    },
    StateTaxRates {
        code: "DC",
        name: "District of Columbia",
        property_tax_rate_percent: dec!(0.57),
        transfer_tax_rate_percent: dec!(1.45),
        recording_fees: dec!(100),
    },
    StateTaxRates {
        code: "DE",
        name: "Delaware",
        property_tax_rate_percent: dec!(0.57),
        transfer_tax_rate_percent: dec!(4.00),
        recording_fees: dec!(135),
    },
    StateTaxRates {
        code: "FL",
        name: "Florida",
        property_tax_rate_percent: dec!(0.86),
        transfer_tax_rate_percent: dec!(0.70),
        recording_fees: dec!(120),
    },
    StateTaxRates {
        code: "GA",
        name: "Georgia",
        property_tax_rate_percent: dec!(0.92),
        transfer_tax_rate_percent: dec!(0.10),
        recording_fees: dec!(75),
    },
    StateTaxRates {
        code: "HI",
        name: "Hawaii",
        property_tax_rate_percent: dec!(0.29),
        transfer_tax_rate_percent: dec!(0.10),
        recording_fees: dec!(95),
    },
    StateTaxRates {
        code: "IA",
        name: "Iowa",
        property_tax_rate_percent: dec!(1.52),
        transfer_tax_rate_percent: dec!(0.16),
        recording_fees: dec!(60),
    },
    StateTaxRates {
        code: "ID",
        name: "Idaho",
        property_tax_rate_percent: dec!(0.63),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(45),
    },
    StateTaxRates {
        code: "IL",
        name: "Illinois",
        property_tax_rate_percent: dec!(2.23),
        transfer_tax_rate_percent: dec!(0.15),
        recording_fees: dec!(150),
    },
    StateTaxRates {
        code: "IN",
        name: "Indiana",
        property_tax_rate_percent: dec!(0.84),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(50),
    },
    StateTaxRates {
        code: "KS",
        name: "Kansas",
        property_tax_rate_percent: dec!(1.41),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(80),
    },
    StateTaxRates {
        code: "KY",
        name: "Kentucky",
        property_tax_rate_percent: dec!(0.83),
        transfer_tax_rate_percent: dec!(0.10),
        recording_fees: dec!(55),
    },
    StateTaxRates {
        code: "LA",
        name: "Louisiana",
        property_tax_rate_percent: dec!(0.56),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(100),
    },
    StateTaxRates {
        code: "MA",
        name: "Massachusetts",
        property_tax_rate_percent: dec!(1.14),
        transfer_tax_rate_percent: dec!(0.456),
        recording_fees: dec!(155),
    },
    StateTaxRates {
        code: "MD",
        name: "Maryland",
        property_tax_rate_percent: dec!(1.05),
        transfer_tax_rate_percent: dec!(0.50),
        recording_fees: dec!(150),
    },
    StateTaxRates {
        code: "ME",
        name: "Maine",
        property_tax_rate_percent: dec!(1.24),
        transfer_tax_rate_percent: dec!(0.44),
        recording_fees: dec!(65),
    },
    StateTaxRates {
        code: "MI",
        name: "Michigan",
        property_tax_rate_percent: dec!(1.38),
        transfer_tax_rate_percent: dec!(0.86),
        recording_fees: dec!(60),
    },
    StateTaxRates {
        code: "MN",
        name: "Minnesota",
        property_tax_rate_percent: dec!(1.11),
        transfer_tax_rate_percent: dec!(0.33),
        recording_fees: dec!(75),
    },
    StateTaxRates {
        code: "MO",
        name: "Missouri",
        property_tax_rate_percent: dec!(0.97),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(50),
    },
    StateTaxRates {
        code: "MS",
        name: "Mississippi",
        property_tax_rate_percent: dec!(0.79),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(40),
    },
    StateTaxRates {
        code: "MT",
        name: "Montana",
        property_tax_rate_percent: dec!(0.74),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(40),
    },
    StateTaxRates {
        code: "NC",
        name: "North Carolina",
        property_tax_rate_percent: dec!(0.80),
        transfer_tax_rate_percent: dec!(0.20),
        recording_fees: dec!(64),
    },
    StateTaxRates {
        code: "ND",
        name: "North Dakota",
        property_tax_rate_percent: dec!(0.98),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(45),
    },
    StateTaxRates {
        code: "NE",
        name: "Nebraska",
        property_tax_rate_percent: dec!(1.63),
        transfer_tax_rate_percent: dec!(0.225),
        recording_fees: dec!(50),
    },
    StateTaxRates {
        code: "NH",
        name: "New Hampshire",
        property_tax_rate_percent: dec!(1.89),
        transfer_tax_rate_percent: dec!(1.50),
        recording_fees: dec!(85),
    },
    StateTaxRates {
        code: "NJ",
        name: "New Jersey",
        property_tax_rate_percent: dec!(2.47),
        transfer_tax_rate_percent: dec!(1.00),
        recording_fees: dec!(175),
    },
    StateTaxRates {
        code: "NM",
        name: "New Mexico",
        property_tax_rate_percent: dec!(0.67),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(50),
    },
    StateTaxRates {
        code: "NV",
        name: "Nevada",
        property_tax_rate_percent: dec!(0.55),
        transfer_tax_rate_percent: dec!(0.51),
        recording_fees: dec!(90),
    },
    StateTaxRates {
        code: "NY",
        name: "New York",
        property_tax_rate_percent: dec!(1.40),
        transfer_tax_rate_percent: dec!(0.40),
        recording_fees: dec!(250),
    },
    StateTaxRates {
        code: "OH",
        name: "Ohio",
        property_tax_rate_percent: dec!(1.53),
        transfer_tax_rate_percent: dec!(0.10),
        recording_fees: dec!(85),
    },
    StateTaxRates {
        code: "OK",
        name: "Oklahoma",
        property_tax_rate_percent: dec!(0.89),
        transfer_tax_rate_percent: dec!(0.15),
        recording_fees: dec!(50),
    },
    StateTaxRates {
        code: "OR",
        name: "Oregon",
        property_tax_rate_percent: dec!(0.93),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(105),
    },
    StateTaxRates {
        code: "PA",
        name: "Pennsylvania",
        property_tax_rate_percent: dec!(1.49),
        transfer_tax_rate_percent: dec!(2.00),
        recording_fees: dec!(250),
    },
    StateTaxRates {
        code: "RI",
        name: "Rhode Island",
        property_tax_rate_percent: dec!(1.40),
        transfer_tax_rate_percent: dec!(0.46),
        recording_fees: dec!(110),
    },
    StateTaxRates {
        code: "SC",
        name: "South Carolina",
        property_tax_rate_percent: dec!(0.56),
        transfer_tax_rate_percent: dec!(0.37),
        recording_fees: dec!(60),
    },
    StateTaxRates {
        code: "SD",
        name: "South Dakota",
        property_tax_rate_percent: dec!(1.17),
        transfer_tax_rate_percent: dec!(0.10),
        recording_fees: dec!(45),
    },
    StateTaxRates {
        code: "TN",
        name: "Tennessee",
        property_tax_rate_percent: dec!(0.67),
        transfer_tax_rate_percent: dec!(0.37),
        recording_fees: dec!(60),
    },
    StateTaxRates {
        code: "TX",
        name: "Texas",
        property_tax_rate_percent: dec!(1.68),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(90),
    },
    StateTaxRates {
        code: "UT",
        name: "Utah",
        property_tax_rate_percent: dec!(0.57),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(40),
    },
    StateTaxRates {
        code: "VA",
        name: "Virginia",
        property_tax_rate_percent: dec!(0.82),
        transfer_tax_rate_percent: dec!(0.33),
        recording_fees: dec!(95),
    },
    StateTaxRates {
        code: "VT",
        name: "Vermont",
        property_tax_rate_percent: dec!(1.83),
        transfer_tax_rate_percent: dec!(1.25),
        recording_fees: dec!(75),
    },
    StateTaxRates {
        code: "WA",
        name: "Washington",
        property_tax_rate_percent: dec!(0.87),
        transfer_tax_rate_percent: dec!(1.28),
        recording_fees: dec!(205),
    },
    StateTaxRates {
        code: "WI",
        name: "Wisconsin",
        property_tax_rate_percent: dec!(1.61),
        transfer_tax_rate_percent: dec!(0.30),
        recording_fees: dec!(30),
    },
    StateTaxRates {
        code: "WV",
        name: "West Virginia",
        property_tax_rate_percent: dec!(0.57),
        transfer_tax_rate_percent: dec!(0.66),
        recording_fees: dec!(50),
    },
    StateTaxRates {
        code: "WY",
        name: "Wyoming",
        property_tax_rate_percent: dec!(0.56),
        transfer_tax_rate_percent: dec!(0.00),
        recording_fees: dec!(45),
    },
];

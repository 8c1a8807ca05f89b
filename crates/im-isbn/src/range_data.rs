//! Registration group and registrant range data.
//!
//! Bounds are listed as flat `lower, upper` pairs, ordered by increasing width.
//! Groups sharing a definition are listed in [`ALIASES`] instead of repeating
//! the bounds.

use crate::range_table::{AliasSpec, GroupSpec};

/// Range definitions for every registration group with its own bounds.
pub const GROUPS: &[GroupSpec<'static>] = &[
    GroupSpec {
        prefix: "978",
        group: "0",
        bounds: &[
            "00", "19", "200", "227", "229", "368", "370", "638", "640", "644", "646", "647", "649",
            "654", "656", "699", "2280", "2289", "3690", "3699", "6390", "6397", "6550", "6559",
            "7000", "8499", "85000", "89999", "900000", "900370", "900372", "949999", "6398000",
            "6399999", "6450000", "6459999", "6480000", "6489999", "9003710", "9003719", "9500000",
            "9999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "1",
        bounds: &[
            "01", "02", "05", "05", "000", "009", "030", "034", "040", "049", "100", "397", "714",
            "716", "0350", "0399", "0700", "0999", "3980", "5499", "6500", "6799", "6860", "7139",
            "7170", "7319", "7620", "7634", "7900", "7999", "8672", "8675", "9730", "9877", "55000",
            "64999", "68000", "68599", "74000", "76199", "76500", "77499", "77540", "77639",
            "77650", "77699", "77830", "78999", "80000", "80049", "80050", "80499", "80500",
            "83799", "83850", "86719", "86760", "86979", "869800", "915999", "916506", "916869",
            "916908", "919599", "919655", "972999", "987800", "991149", "991200", "998989",
            "0670000", "0699999", "7320000", "7399999", "7635000", "7649999", "7750000", "7753999",
            "7764000", "7764999", "7770000", "7782999", "8380000", "8384999", "9160000", "9165059",
            "9168700", "9169079", "9196000", "9196549", "9911500", "9911999", "9989900", "9999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "2",
        bounds: &[
            "00", "19", "200", "349", "400", "486", "495", "495", "497", "527", "530", "699",
            "4960", "4966", "5280", "5299", "7000", "8399", "35000", "39999", "49670", "49699",
            "84000", "89999", "91980", "91980", "487000", "494999", "900000", "919799", "919810",
            "919942", "919969", "949999", "9199430", "9199689", "9500000", "9999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "3",
        bounds: &[
            "00", "02", "04", "19", "39", "39", "030", "033", "200", "389", "400", "688", "0340",
            "0369", "6950", "8499", "9996", "9999", "03700", "03999", "68900", "69499", "85000",
            "89999", "95400", "96999", "98500", "99959", "900000", "949999", "9500000", "9539999",
            "9700000", "9849999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "5",
        bounds: &[
            "01", "19", "200", "361", "363", "420", "430", "430", "440", "440", "450", "603", "605",
            "699", "0050", "0099", "3620", "3623", "4210", "4299", "4310", "4399", "4410", "4499",
            "7000", "8499", "9200", "9299", "9501", "9799", "9910", "9999", "00000", "00499",
            "36240", "36299", "85000", "89999", "91000", "91999", "93000", "94999", "98000",
            "98999", "900000", "909999", "6040000", "6049999", "9500000", "9500999", "9900000",
            "9909999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "7",
        bounds: &["00", "09", "100", "499", "5000", "7999", "80000", "89999", "900000", "999999"],
    },
    GroupSpec {
        prefix: "978",
        group: "65",
        bounds: &[
            "00", "01", "250", "299", "300", "302", "5000", "5129", "5200", "6149", "80000",
            "81824", "83000", "89999", "900000", "902449", "980000", "999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "80",
        bounds: &[
            "00", "19", "200", "529", "550", "689", "7000", "8499", "53000", "54999", "69000",
            "69999", "85000", "89999", "99900", "99999", "900000", "998999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "82",
        bounds: &[
            "00", "19", "200", "689", "7000", "8999", "90000", "98999", "690000", "699999",
            "990000", "999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "83",
        bounds: &[
            "00", "19", "200", "599", "7000", "8499", "60000", "69999", "85000", "89999", "900000",
            "999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "84",
        bounds: &[
            "00", "09", "140", "149", "200", "699", "1050", "1199", "1300", "1399", "7000", "8499",
            "9000", "9199", "9700", "9999", "10000", "10499", "15000", "19999", "85000", "89999",
            "92400", "92999", "95000", "96999", "120000", "129999", "920000", "923999", "930000",
            "949999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "85",
        bounds: &[
            "00", "19", "96", "97", "200", "454", "456", "528", "534", "539", "5320", "5339",
            "5440", "5479", "5500", "5999", "7000", "8499", "9450", "9599", "45530", "45599",
            "52900", "53199", "54000", "54029", "54030", "54039", "54050", "54089", "54100",
            "54399", "54800", "54999", "60000", "69999", "85000", "89999", "92500", "94499",
            "98000", "99999", "455000", "455299", "540400", "540499", "540900", "540999", "900000",
            "924999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "86",
        bounds: &["00", "29", "300", "599", "6000", "7999", "80000", "89999", "900000", "999999"],
    },
    GroupSpec {
        prefix: "978",
        group: "87",
        bounds: &["00", "29", "400", "649", "7000", "7999", "85000", "94999", "970000", "999999"],
    },
    GroupSpec {
        prefix: "978",
        group: "88",
        bounds: &[
            "00", "19", "200", "311", "315", "318", "323", "326", "339", "360", "363", "548", "555",
            "599", "910", "926", "3270", "3389", "3610", "3629", "5490", "5549", "6000", "8499",
            "9270", "9399", "31200", "31499", "31900", "32299", "85000", "89999", "94800", "99999",
            "900000", "909999", "940000", "947999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "89",
        bounds: &[
            "00", "24", "250", "549", "990", "999", "5500", "8499", "85000", "94999", "97000",
            "98999", "950000", "969999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "90",
        bounds: &[
            "00", "19", "90", "90", "94", "94", "200", "499", "5000", "6999", "8500", "8999",
            "70000", "79999", "800000", "849999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "91",
        bounds: &[
            "0", "1", "20", "49", "500", "649", "7000", "8199", "85000", "94999", "970000",
            "999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "92",
        bounds: &[
            "0", "5", "60", "79", "800", "899", "9000", "9499", "95000", "98999", "990000",
            "999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "93",
        bounds: &[
            "00", "09", "100", "479", "5000", "7999", "48000", "49999", "80000", "95999", "960000",
            "999999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "94",
        bounds: &[
            "000", "599", "6000", "6387", "6389", "6395", "6397", "6399", "6401", "6406", "6408",
            "6419", "6421", "6432", "6434", "6435", "6437", "6443", "6445", "6450", "6452", "6458",
            "6460", "6465", "6467", "6474", "6476", "6476", "6479", "6493", "6495", "6497", "6499",
            "8999", "63881", "63881", "63884", "63885", "63887", "63889", "63961", "63962", "63964",
            "63964", "63966", "63969", "64001", "64004", "64006", "64006", "64009", "64009",
            "64074", "64074", "64076", "64077", "64200", "64201", "64203", "64203", "64205",
            "64206", "64208", "64208", "64330", "64331", "64333", "64333", "64336", "64336",
            "64338", "64339", "64361", "64363", "64366", "64366", "64368", "64369", "64441",
            "64441", "64443", "64443", "64445", "64446", "64449", "64449", "64510", "64512",
            "64514", "64515", "64591", "64592", "64595", "64596", "64599", "64599", "64661",
            "64662", "64666", "64666", "64669", "64669", "64750", "64751", "64754", "64754",
            "64756", "64757", "64759", "64759", "64771", "64771", "64773", "64773", "64777",
            "64779", "64781", "64781", "64783", "64786", "64788", "64789", "64941", "64942",
            "64945", "64946", "64948", "64948", "64980", "64980", "64983", "64984", "64987",
            "64987", "90000", "99999", "638800", "638809", "638820", "638839", "638860", "638869",
            "639600", "639609", "639630", "639639", "639650", "639659", "640000", "640009",
            "640050", "640059", "640070", "640089", "640700", "640739", "640750", "640759",
            "640780", "640799", "642020", "642029", "642040", "642049", "642070", "642079",
            "642090", "642099", "643320", "643329", "643340", "643359", "643370", "643379",
            "643600", "643609", "643640", "643659", "643670", "643679", "644400", "644409",
            "644420", "644429", "644440", "644449", "644470", "644489", "645130", "645139",
            "645160", "645199", "645900", "645909", "645930", "645949", "645970", "645989",
            "646600", "646609", "646630", "646659", "646670", "646689", "647520", "647539",
            "647550", "647559", "647580", "647589", "647700", "647708", "647723", "647729",
            "647740", "647769", "647800", "647809", "647820", "647829", "647870", "647879",
            "649400", "649409", "649430", "649449", "649470", "649479", "649490", "649499",
            "649810", "649829", "649850", "649869", "649880", "649899",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "600",
        bounds: &[
            "00", "09", "100", "499", "993", "995", "5000", "8999", "9868", "9929", "90000",
            "98679", "99600", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "601",
        bounds: &["00", "19", "85", "99", "200", "699", "7000", "7999", "80000", "84999"],
    },
    GroupSpec {
        prefix: "978",
        group: "602",
        bounds: &[
            "00", "06", "200", "499", "0700", "1399", "1500", "1699", "5400", "5999", "6200",
            "6999", "7500", "9499", "14000", "14999", "17000", "19999", "50000", "53999", "60000",
            "61999", "70000", "74999", "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "603",
        bounds: &["00", "04", "05", "49", "500", "799", "8000", "8999", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "604",
        bounds: &[
            "0", "2", "40", "46", "50", "89", "300", "399", "470", "497", "900", "979", "4980",
            "4999", "9800", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "605",
        bounds: &[
            "00", "02", "04", "05", "07", "09", "030", "039", "100", "199", "240", "399", "2000",
            "2399", "4000", "5999", "7500", "7999", "9000", "9999", "06000", "06999", "60000",
            "74999", "80000", "89999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "606",
        bounds: &[
            "10", "49", "000", "099", "500", "799", "910", "919", "975", "999", "8000", "9099",
            "9600", "9749", "92000", "95999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "607",
        bounds: &[
            "00", "25", "27", "39", "400", "588", "600", "694", "700", "749", "2600", "2649",
            "5890", "5929", "7500", "9499", "26500", "26999", "59300", "59999", "69500", "69999",
            "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "608",
        bounds: &["0", "0", "7", "9", "10", "19", "200", "449", "4500", "6499", "65000", "69999"],
    },
    GroupSpec {
        prefix: "978",
        group: "609",
        bounds: &["00", "39", "400", "799", "8000", "9499", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "612",
        bounds: &["00", "29", "300", "399", "4000", "4499", "5000", "5224", "45000", "49999"],
    },
    GroupSpec {
        prefix: "978",
        group: "613",
        bounds: &["0", "9"],
    },
    GroupSpec {
        prefix: "978",
        group: "615",
        bounds: &["00", "09", "100", "499", "5000", "7999", "80000", "89999"],
    },
    GroupSpec {
        prefix: "978",
        group: "616",
        bounds: &["00", "19", "200", "699", "7000", "8999", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "617",
        bounds: &["00", "49", "500", "699", "7000", "8999", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "618",
        bounds: &["00", "19", "200", "499", "5000", "7999", "80000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "619",
        bounds: &["00", "14", "150", "699", "7000", "8999", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "621",
        bounds: &["00", "29", "400", "599", "8000", "8999", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "622",
        bounds: &["00", "10", "200", "459", "4600", "8749", "87500", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "623",
        bounds: &["00", "10", "110", "524", "5250", "8799", "88000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "624",
        bounds: &["00", "04", "200", "249", "5000", "6699", "93000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "625",
        bounds: &[
            "00", "01", "320", "442", "445", "449", "5500", "7793", "7795", "8499", "44300",
            "44499", "77940", "77949", "94000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "626",
        bounds: &["00", "04", "300", "499", "7000", "7999", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "627",
        bounds: &["30", "31", "500", "524", "7500", "7999", "94500", "94649"],
    },
    GroupSpec {
        prefix: "978",
        group: "628",
        bounds: &["00", "09", "500", "549", "7500", "8499", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "629",
        bounds: &["00", "02", "460", "499", "7500", "7999", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "630",
        bounds: &["300", "399", "6500", "6849", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "631",
        bounds: &["00", "09", "300", "399", "6500", "7499", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "632",
        bounds: &["00", "11", "600", "679"],
    },
    GroupSpec {
        prefix: "978",
        group: "633",
        bounds: &["00", "01", "300", "349", "8250", "8999", "99500", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "634",
        bounds: &["00", "04", "200", "349", "7000", "7999", "96000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "950",
        bounds: &["00", "49", "500", "899", "9000", "9899", "99000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "951",
        bounds: &["0", "1", "20", "54", "550", "889", "8900", "9499", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "952",
        bounds: &[
            "00", "19", "60", "64", "80", "94", "200", "499", "5000", "5999", "6600", "6699",
            "7000", "7999", "9500", "9899", "65000", "65999", "67000", "69999", "99000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "953",
        bounds: &[
            "0", "0", "10", "14", "51", "54", "150", "459", "500", "500", "6000", "9499", "46000",
            "49999", "50100", "50999", "55000", "59999", "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "954",
        bounds: &[
            "00", "28", "300", "799", "2900", "2999", "8000", "8999", "9300", "9999", "90000",
            "92999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "955",
        bounds: &[
            "20", "33", "550", "710", "0000", "1999", "3400", "3549", "3600", "3799", "3900",
            "4099", "4500", "4999", "7150", "9499", "35500", "35999", "38000", "38999", "41000",
            "44999", "50000", "54999", "71100", "71499", "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "956",
        bounds: &[
            "00", "07", "10", "19", "200", "599", "6000", "6999", "7000", "9999", "08000", "08499",
            "09000", "09999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "957",
        bounds: &[
            "00", "02", "05", "19", "21", "27", "31", "43", "440", "819", "0300", "0499", "2000",
            "2099", "8200", "9699", "28000", "30999", "97000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "958",
        bounds: &[
            "00", "49", "500", "509", "600", "799", "5100", "5199", "5400", "5599", "8000", "9499",
            "52000", "53999", "56000", "59999", "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "959",
        bounds: &["00", "19", "200", "699", "7000", "8499", "85000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "960",
        bounds: &[
            "00", "19", "93", "93", "200", "659", "690", "699", "6600", "6899", "7000", "8499",
            "9400", "9799", "85000", "92999", "98000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "961",
        bounds: &["00", "19", "200", "599", "6000", "8999", "90000", "97999"],
    },
    GroupSpec {
        prefix: "978",
        group: "962",
        bounds: &[
            "00", "19", "200", "699", "900", "999", "7000", "8499", "8700", "8999", "85000",
            "86999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "963",
        bounds: &["00", "19", "200", "699", "7000", "8499", "9000", "9999", "85000", "89999"],
    },
    GroupSpec {
        prefix: "978",
        group: "964",
        bounds: &[
            "00", "14", "150", "249", "300", "549", "970", "989", "2500", "2999", "5500", "8999",
            "9900", "9999", "90000", "96999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "965",
        bounds: &["00", "19", "200", "599", "7000", "7999", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "966",
        bounds: &[
            "00", "12", "14", "14", "130", "139", "170", "199", "279", "289", "300", "699", "910",
            "949", "980", "999", "1500", "1699", "2000", "2789", "2900", "2999", "7000", "8999",
            "90000", "90999", "95000", "97999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "967",
        bounds: &[
            "60", "89", "250", "254", "300", "499", "900", "989", "0000", "0999", "2000", "2499",
            "2700", "2799", "2800", "2999", "5000", "5999", "9900", "9989", "10000", "19999",
            "25500", "26999", "99900", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "968",
        bounds: &["01", "39", "400", "499", "800", "899", "5000", "7999", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "969",
        bounds: &[
            "0", "1", "20", "20", "24", "39", "210", "219", "400", "749", "2200", "2299", "7500",
            "9999", "23000", "23999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "970",
        bounds: &["01", "59", "600", "899", "9000", "9099", "9700", "9999", "91000", "96999"],
    },
    GroupSpec {
        prefix: "978",
        group: "971",
        bounds: &[
            "02", "02", "06", "49", "97", "98", "000", "015", "500", "849", "0160", "0199", "0300",
            "0599", "8500", "9099", "9600", "9699", "9900", "9999", "91000", "95999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "972",
        bounds: &["0", "1", "20", "54", "550", "799", "8000", "9499", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "973",
        bounds: &[
            "0", "0", "20", "54", "100", "169", "550", "759", "1700", "1999", "7600", "8499",
            "8900", "9499", "85000", "88999", "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "974",
        bounds: &[
            "00", "19", "200", "699", "7000", "8499", "9500", "9999", "85000", "89999", "90000",
            "94999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "975",
        bounds: &[
            "02", "23", "250", "599", "990", "999", "2400", "2499", "6000", "9199", "00000",
            "01999", "92000", "98999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "976",
        bounds: &["0", "3", "40", "59", "600", "799", "8000", "9499", "95000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "977",
        bounds: &[
            "00", "19", "90", "95", "200", "499", "700", "849", "890", "894", "970", "999", "5000",
            "6999", "8740", "8899", "8950", "8999", "9600", "9699", "85000", "87399",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "978",
        bounds: &[
            "000", "199", "765", "799", "900", "999", "2000", "2999", "8000", "8999", "30000",
            "69999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "979",
        bounds: &[
            "20", "29", "000", "099", "400", "799", "1000", "1499", "3000", "3999", "8000", "9499",
            "15000", "19999", "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "980",
        bounds: &["00", "19", "200", "599", "6000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "981",
        bounds: &[
            "00", "16", "18", "19", "94", "94", "96", "99", "200", "299", "310", "399", "3000",
            "3099", "4000", "5999", "17000", "17999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "982",
        bounds: &["00", "09", "70", "89", "100", "699", "9000", "9799", "98000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "983",
        bounds: &[
            "00", "01", "45", "49", "50", "79", "020", "199", "800", "899", "2000", "3999", "9000",
            "9899", "40000", "44999", "99000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "984",
        bounds: &["00", "39", "400", "799", "8000", "8999", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "985",
        bounds: &["00", "39", "400", "599", "880", "899", "6000", "8799", "90000", "99999"],
    },
    GroupSpec {
        prefix: "978",
        group: "986",
        bounds: &[
            "00", "05", "08", "11", "120", "539", "0700", "0799", "5400", "7999", "06000", "06999",
            "80000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "987",
        bounds: &[
            "00", "09", "30", "35", "42", "43", "85", "88", "500", "824", "1000", "1999", "3600",
            "4199", "4400", "4499", "4900", "4999", "8250", "8279", "8300", "8499", "8900", "9499",
            "20000", "29999", "45000", "48999", "82800", "82999", "95000", "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "988",
        bounds: &[
            "00", "11", "200", "699", "8000", "9699", "12000", "19999", "70000", "79999", "97000",
            "99999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9908",
        bounds: &["0", "1", "50", "69", "825", "899", "9700", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9909",
        bounds: &["00", "19", "750", "849", "9800", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9910",
        bounds: &["01", "09", "650", "799", "8800", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9911",
        bounds: &["20", "24", "550", "749", "9500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9912",
        bounds: &["40", "44", "750", "799", "9800", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9913",
        bounds: &["00", "07", "600", "699", "9550", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9914",
        bounds: &["35", "55", "700", "774", "9450", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9915",
        bounds: &["40", "59", "650", "799", "9300", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9916",
        bounds: &[
            "0", "0", "4", "5", "10", "39", "79", "91", "94", "94", "600", "789", "9200", "9399",
            "9500", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9917",
        bounds: &["0", "0", "30", "34", "600", "699", "9700", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9918",
        bounds: &["0", "0", "20", "29", "600", "799", "9500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9919",
        bounds: &["0", "0", "20", "29", "500", "599", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9920",
        bounds: &["23", "42", "430", "799", "8550", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9921",
        bounds: &["0", "0", "30", "39", "700", "899", "9700", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9922",
        bounds: &["20", "29", "600", "799", "8250", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9923",
        bounds: &["0", "0", "10", "69", "700", "899", "9400", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9924",
        bounds: &["28", "39", "500", "659", "8950", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9925",
        bounds: &["0", "2", "30", "54", "550", "734", "7350", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9926",
        bounds: &["0", "1", "20", "39", "400", "799", "8000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9927",
        bounds: &["00", "09", "100", "399", "4000", "4999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9929",
        bounds: &["0", "3", "40", "54", "550", "799", "8000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9930",
        bounds: &["00", "49", "500", "939", "9400", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9931",
        bounds: &["00", "23", "240", "899", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9932",
        bounds: &["00", "39", "400", "849", "8500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9933",
        bounds: &["0", "0", "10", "39", "87", "89", "400", "869", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9934",
        bounds: &["0", "0", "10", "49", "500", "799", "8000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9937",
        bounds: &["0", "2", "30", "49", "500", "799", "8000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9938",
        bounds: &["00", "79", "800", "949", "975", "990", "9500", "9749", "9910", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9939",
        bounds: &[
            "0", "3", "40", "47", "50", "79", "98", "99", "480", "499", "800", "899", "960", "979",
            "9000", "9599",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9940",
        bounds: &["0", "1", "20", "49", "84", "86", "500", "839", "8700", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9942",
        bounds: &[
            "00", "59", "600", "699", "750", "849", "900", "984", "7000", "7499", "8500", "8999",
            "9850", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9943",
        bounds: &["00", "29", "300", "399", "975", "999", "4000", "9749"],
    },
    GroupSpec {
        prefix: "978",
        group: "9944",
        bounds: &[
            "60", "69", "80", "89", "100", "499", "700", "799", "900", "999", "0000", "0999",
            "5000", "5999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9945",
        bounds: &[
            "00", "00", "08", "39", "57", "57", "80", "80", "010", "079", "400", "569", "580",
            "799", "810", "849", "8500", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9946",
        bounds: &["0", "1", "20", "39", "400", "899", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9947",
        bounds: &["0", "1", "20", "79", "800", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9949",
        bounds: &[
            "00", "08", "10", "39", "70", "71", "75", "89", "090", "099", "400", "699", "7200",
            "7499", "9000", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9950",
        bounds: &["00", "29", "300", "849", "8500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9953",
        bounds: &[
            "0", "0", "10", "39", "60", "89", "93", "96", "400", "599", "970", "999", "9000",
            "9299",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9955",
        bounds: &["00", "39", "400", "929", "9300", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9957",
        bounds: &[
            "00", "39", "65", "67", "70", "84", "88", "99", "400", "649", "680", "699", "8500",
            "8799",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9958",
        bounds: &[
            "00", "01", "10", "18", "20", "49", "020", "029", "040", "089", "500", "899", "0300",
            "0399", "0900", "0999", "1900", "1999", "9000", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9959",
        bounds: &["0", "1", "20", "79", "98", "99", "800", "949", "970", "979", "9500", "9699"],
    },
    GroupSpec {
        prefix: "978",
        group: "9960",
        bounds: &["00", "59", "600", "899", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9961",
        bounds: &["0", "2", "30", "69", "700", "949", "9500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9962",
        bounds: &["00", "54", "56", "59", "600", "849", "5500", "5599", "8500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9963",
        bounds: &[
            "0", "1", "30", "54", "250", "279", "550", "734", "2000", "2499", "2800", "2999",
            "7350", "7499", "7500", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9964",
        bounds: &["0", "6", "70", "94", "950", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9965",
        bounds: &["00", "39", "400", "899", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9966",
        bounds: &[
            "14", "14", "20", "69", "000", "139", "750", "820", "825", "825", "829", "959", "1500",
            "1999", "7000", "7499", "8210", "8249", "8260", "8289", "9600", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9969",
        bounds: &["00", "06", "500", "649", "9700", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9971",
        bounds: &["0", "5", "60", "89", "900", "989", "9900", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9972",
        bounds: &[
            "1", "1", "00", "09", "30", "59", "200", "249", "600", "899", "2500", "2999", "9000",
            "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9973",
        bounds: &[
            "00", "05", "10", "69", "060", "089", "700", "969", "0900", "0999", "9700", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9974",
        bounds: &[
            "0", "2", "30", "54", "91", "94", "95", "99", "550", "749", "880", "909", "7500",
            "8799",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9975",
        bounds: &[
            "0", "0", "45", "89", "100", "299", "900", "949", "3000", "3999", "4000", "4499",
            "9500", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9977",
        bounds: &["00", "89", "900", "989", "9900", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9978",
        bounds: &["00", "29", "40", "94", "300", "399", "950", "989", "9900", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9979",
        bounds: &["0", "4", "50", "64", "66", "75", "650", "659", "760", "899", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9980",
        bounds: &["0", "3", "40", "89", "900", "989", "9900", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9981",
        bounds: &[
            "00", "09", "20", "79", "100", "159", "800", "949", "1600", "1999", "9500", "9999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "9982",
        bounds: &["00", "79", "800", "989", "9900", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9983",
        bounds: &["80", "94", "950", "989", "9900", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9984",
        bounds: &["00", "49", "500", "899", "9000", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9986",
        bounds: &["00", "39", "97", "99", "400", "899", "940", "969", "9000", "9399"],
    },
    GroupSpec {
        prefix: "978",
        group: "9987",
        bounds: &["00", "39", "400", "879", "8800", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9988",
        bounds: &["0", "3", "40", "54", "550", "749", "7500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "9989",
        bounds: &["0", "0", "30", "59", "100", "199", "600", "949", "2000", "2999", "9500", "9999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99901",
        bounds: &["00", "49", "80", "99", "500", "799"],
    },
    GroupSpec {
        prefix: "978",
        group: "99903",
        bounds: &["0", "1", "20", "89", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99904",
        bounds: &["0", "5", "60", "89", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99905",
        bounds: &["0", "3", "40", "79", "800", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99906",
        bounds: &["0", "2", "30", "59", "70", "89", "90", "94", "600", "699", "950", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99908",
        bounds: &["0", "0", "10", "89", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99909",
        bounds: &["0", "3", "40", "94", "950", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99910",
        bounds: &["0", "2", "30", "89", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99911",
        bounds: &["00", "59", "600", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99912",
        bounds: &["0", "3", "60", "89", "400", "599", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99913",
        bounds: &["0", "2", "30", "35", "600", "604"],
    },
    GroupSpec {
        prefix: "978",
        group: "99914",
        bounds: &[
            "0", "4", "7", "7", "50", "69", "80", "86", "88", "89", "870", "879", "900", "999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "99915",
        bounds: &["0", "4", "50", "79", "800", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99916",
        bounds: &["0", "2", "30", "69", "700", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99919",
        bounds: &["0", "2", "40", "79", "300", "399", "800", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99921",
        bounds: &["0", "1", "8", "8", "20", "69", "90", "99", "700", "799"],
    },
    GroupSpec {
        prefix: "978",
        group: "99922",
        bounds: &["0", "3", "40", "69", "700", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99926",
        bounds: &["0", "0", "10", "59", "87", "89", "90", "99", "600", "869"],
    },
    GroupSpec {
        prefix: "978",
        group: "99927",
        bounds: &["0", "2", "30", "59", "600", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99928",
        bounds: &["0", "0", "10", "79", "800", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99932",
        bounds: &["0", "0", "7", "7", "10", "59", "80", "99", "600", "699"],
    },
    GroupSpec {
        prefix: "978",
        group: "99935",
        bounds: &["0", "2", "7", "8", "30", "59", "90", "99", "600", "699"],
    },
    GroupSpec {
        prefix: "978",
        group: "99936",
        bounds: &["0", "0", "10", "59", "600", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99937",
        bounds: &["0", "1", "20", "59", "600", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99938",
        bounds: &["0", "1", "20", "59", "90", "99", "600", "899"],
    },
    GroupSpec {
        prefix: "978",
        group: "99940",
        bounds: &["0", "0", "10", "69", "700", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99941",
        bounds: &["0", "2", "30", "79", "800", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99953",
        bounds: &["0", "2", "30", "79", "94", "99", "800", "939"],
    },
    GroupSpec {
        prefix: "978",
        group: "99954",
        bounds: &["0", "2", "30", "69", "88", "99", "700", "879"],
    },
    GroupSpec {
        prefix: "978",
        group: "99955",
        bounds: &["0", "1", "20", "59", "80", "99", "600", "799"],
    },
    GroupSpec {
        prefix: "978",
        group: "99956",
        bounds: &["00", "59", "86", "99", "600", "859"],
    },
    GroupSpec {
        prefix: "978",
        group: "99958",
        bounds: &["0", "4", "50", "93", "940", "949", "950", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99960",
        bounds: &["10", "94", "070", "099", "950", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99961",
        bounds: &["0", "2", "37", "89", "300", "369", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99963",
        bounds: &["00", "49", "92", "99", "500", "919"],
    },
    GroupSpec {
        prefix: "978",
        group: "99966",
        bounds: &["0", "2", "30", "69", "80", "96", "700", "799", "970", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99971",
        bounds: &["0", "3", "40", "84", "850", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99974",
        bounds: &[
            "0", "0", "10", "25", "40", "63", "65", "79", "260", "399", "640", "649", "800", "999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "99976",
        bounds: &[
            "00", "03", "10", "15", "20", "59", "82", "89", "050", "099", "160", "199", "600",
            "819", "900", "999",
        ],
    },
    GroupSpec {
        prefix: "978",
        group: "99977",
        bounds: &["0", "1", "40", "69", "700", "799", "975", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99978",
        bounds: &["0", "4", "50", "69", "700", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99980",
        bounds: &["0", "0", "30", "64", "700", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99981",
        bounds: &["0", "0", "15", "19", "22", "74", "120", "149", "200", "219", "750", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99982",
        bounds: &["0", "2", "50", "71", "885", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99983",
        bounds: &["0", "0", "35", "69", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99984",
        bounds: &["0", "0", "50", "69", "950", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99985",
        bounds: &["0", "1", "25", "79", "800", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99987",
        bounds: &["700", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99988",
        bounds: &["0", "0", "50", "54", "800", "824"],
    },
    GroupSpec {
        prefix: "978",
        group: "99989",
        bounds: &["0", "1", "50", "79", "900", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99990",
        bounds: &["0", "0", "50", "57", "960", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99992",
        bounds: &["0", "1", "50", "64", "950", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99993",
        bounds: &["0", "2", "50", "54", "980", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99994",
        bounds: &["0", "0", "50", "52", "985", "999"],
    },
    GroupSpec {
        prefix: "978",
        group: "99995",
        bounds: &["50", "52", "975", "999"],
    },
    GroupSpec {
        prefix: "979",
        group: "8",
        bounds: &[
            "200", "229", "230", "239", "3000", "3199", "3200", "3499", "3500", "8849", "88500",
            "89999", "90000", "90999", "9850000", "9899999", "9900000", "9929999", "9985000",
            "9999999",
        ],
    },
    GroupSpec {
        prefix: "979",
        group: "10",
        bounds: &["00", "19", "200", "699", "7000", "8999", "90000", "97599", "976000", "999999"],
    },
    GroupSpec {
        prefix: "979",
        group: "11",
        bounds: &["00", "24", "250", "549", "5500", "8499", "85000", "94999", "950000", "999999"],
    },
    GroupSpec {
        prefix: "979",
        group: "12",
        bounds: &["200", "299", "5450", "5999", "80000", "84999", "985000", "999999"],
    },
    GroupSpec {
        prefix: "979",
        group: "13",
        bounds: &["00", "00", "600", "604", "7000", "7349", "87500", "89999", "990000", "999999"],
    },
];

/// Registration groups that reuse another group's registrant ranges.
pub const ALIASES: &[AliasSpec<'static>] = &[
    AliasSpec::new("978", "4", "0"),
    AliasSpec::new("978", "81", "80"),
    AliasSpec::new("978", "614", "609"),
    AliasSpec::new("978", "620", "613"),
    AliasSpec::new("978", "989", "972"),
    AliasSpec::new("978", "9936", "9926"),
    AliasSpec::new("978", "9952", "9926"),
    AliasSpec::new("978", "9954", "9926"),
    AliasSpec::new("978", "9928", "9927"),
    AliasSpec::new("978", "9968", "9930"),
    AliasSpec::new("978", "9948", "9932"),
    AliasSpec::new("978", "9951", "9932"),
    AliasSpec::new("978", "9935", "9933"),
    AliasSpec::new("978", "9941", "9933"),
    AliasSpec::new("978", "9956", "9933"),
    AliasSpec::new("978", "9985", "9939"),
    AliasSpec::new("978", "99923", "9947"),
    AliasSpec::new("978", "99924", "9947"),
    AliasSpec::new("978", "99934", "9947"),
    AliasSpec::new("978", "99957", "9947"),
    AliasSpec::new("978", "99964", "9947"),
    AliasSpec::new("978", "9967", "9965"),
    AliasSpec::new("978", "9970", "9965"),
    AliasSpec::new("978", "9976", "9971"),
    AliasSpec::new("978", "99949", "99903"),
    AliasSpec::new("978", "99939", "99904"),
    AliasSpec::new("978", "99945", "99904"),
    AliasSpec::new("978", "99918", "99905"),
    AliasSpec::new("978", "99925", "99905"),
    AliasSpec::new("978", "99973", "99905"),
    AliasSpec::new("978", "99979", "99905"),
    AliasSpec::new("978", "99917", "99910"),
    AliasSpec::new("978", "99968", "99912"),
    AliasSpec::new("978", "99920", "99914"),
    AliasSpec::new("978", "99970", "99914"),
    AliasSpec::new("978", "99972", "99914"),
    AliasSpec::new("978", "99929", "99915"),
    AliasSpec::new("978", "99930", "99915"),
    AliasSpec::new("978", "99931", "99915"),
    AliasSpec::new("978", "99942", "99915"),
    AliasSpec::new("978", "99944", "99915"),
    AliasSpec::new("978", "99948", "99915"),
    AliasSpec::new("978", "99950", "99915"),
    AliasSpec::new("978", "99952", "99915"),
    AliasSpec::new("978", "99962", "99915"),
    AliasSpec::new("978", "99969", "99915"),
    AliasSpec::new("978", "99947", "99916"),
    AliasSpec::new("978", "99975", "99919"),
    AliasSpec::new("978", "99965", "99922"),
    AliasSpec::new("978", "99933", "99927"),
    AliasSpec::new("978", "99943", "99927"),
    AliasSpec::new("978", "99946", "99927"),
    AliasSpec::new("978", "99959", "99927"),
    AliasSpec::new("978", "99967", "99936"),
    AliasSpec::new("978", "99986", "99984"),
];

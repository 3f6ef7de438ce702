//! Static country table: display name, ISO 3166 alpha-2 / alpha-3 / numeric,
//! plus alternative spellings seen in the upstream feeds.

use super::CountryRecord as C;

pub(super) const COUNTRIES: &[C] = &[
    C::new("Afghanistan", "AF", "AFG", Some(4), &[]),
    C::new("Albania", "AL", "ALB", Some(8), &[]),
    C::new("Algeria", "DZ", "DZA", Some(12), &[]),
    C::new("Andorra", "AD", "AND", Some(20), &[]),
    C::new("Angola", "AO", "AGO", Some(24), &[]),
    C::new("Antarctica", "AQ", "ATA", Some(10), &[]),
    C::new("Antigua and Barbuda", "AG", "ATG", Some(28), &[]),
    C::new("Argentina", "AR", "ARG", Some(32), &[]),
    C::new("Armenia", "AM", "ARM", Some(51), &[]),
    C::new("Australia", "AU", "AUS", Some(36), &[]),
    C::new("Austria", "AT", "AUT", Some(40), &[]),
    C::new("Azerbaijan", "AZ", "AZE", Some(31), &[]),
    C::new("Bahamas", "BS", "BHS", Some(44), &["The Bahamas", "Bahamas, The"]),
    C::new("Bahrain", "BH", "BHR", Some(48), &[]),
    C::new("Bangladesh", "BD", "BGD", Some(50), &[]),
    C::new("Barbados", "BB", "BRB", Some(52), &[]),
    C::new("Belarus", "BY", "BLR", Some(112), &[]),
    C::new("Belgium", "BE", "BEL", Some(56), &[]),
    C::new("Belize", "BZ", "BLZ", Some(84), &[]),
    C::new("Benin", "BJ", "BEN", Some(204), &[]),
    C::new("Bhutan", "BT", "BTN", Some(64), &[]),
    C::new("Bolivia", "BO", "BOL", Some(68), &["Plurinational State of Bolivia"]),
    C::new("Bosnia", "BA", "BIH", Some(70), &["Bosnia and Herzegovina"]),
    C::new("Botswana", "BW", "BWA", Some(72), &[]),
    C::new("Brazil", "BR", "BRA", Some(76), &[]),
    C::new("Brunei", "BN", "BRN", Some(96), &["Brunei Darussalam"]),
    C::new("Bulgaria", "BG", "BGR", Some(100), &[]),
    C::new("Burkina Faso", "BF", "BFA", Some(854), &[]),
    C::new("Burundi", "BI", "BDI", Some(108), &[]),
    C::new("Cabo Verde", "CV", "CPV", Some(132), &["Cape Verde"]),
    C::new("Cambodia", "KH", "KHM", Some(116), &[]),
    C::new("Cameroon", "CM", "CMR", Some(120), &[]),
    C::new("Canada", "CA", "CAN", Some(124), &[]),
    C::new("CAR", "CF", "CAF", Some(140), &["Central African Republic"]),
    C::new("Chad", "TD", "TCD", Some(148), &[]),
    C::new("Chile", "CL", "CHL", Some(152), &[]),
    C::new("China", "CN", "CHN", Some(156), &["Mainland China", "People's Republic of China"]),
    C::new("Colombia", "CO", "COL", Some(170), &[]),
    C::new("Comoros", "KM", "COM", Some(174), &[]),
    C::new("Congo", "CG", "COG", Some(178), &["Congo (Brazzaville)", "Republic of the Congo"]),
    C::new("Costa Rica", "CR", "CRI", Some(188), &[]),
    C::new("Côte d'Ivoire", "CI", "CIV", Some(384), &["Cote d'Ivoire", "Ivory Coast"]),
    C::new("Croatia", "HR", "HRV", Some(191), &[]),
    C::new("Cuba", "CU", "CUB", Some(192), &[]),
    C::new("Cyprus", "CY", "CYP", Some(196), &[]),
    C::new("Czechia", "CZ", "CZE", Some(203), &["Czech Republic"]),
    C::new("DRC", "CD", "COD", Some(180), &["Congo (Kinshasa)", "Democratic Republic of the Congo"]),
    C::new("Denmark", "DK", "DNK", Some(208), &[]),
    C::new("Djibouti", "DJ", "DJI", Some(262), &[]),
    C::new("Dominica", "DM", "DMA", Some(212), &[]),
    C::new("Dominican Republic", "DO", "DOM", Some(214), &[]),
    C::new("Ecuador", "EC", "ECU", Some(218), &[]),
    C::new("Egypt", "EG", "EGY", Some(818), &[]),
    C::new("El Salvador", "SV", "SLV", Some(222), &[]),
    C::new("Equatorial Guinea", "GQ", "GNQ", Some(226), &[]),
    C::new("Eritrea", "ER", "ERI", Some(232), &[]),
    C::new("Estonia", "EE", "EST", Some(233), &[]),
    C::new("Eswatini", "SZ", "SWZ", Some(748), &["Swaziland"]),
    C::new("Ethiopia", "ET", "ETH", Some(231), &[]),
    C::new("Fiji", "FJ", "FJI", Some(242), &[]),
    C::new("Finland", "FI", "FIN", Some(246), &[]),
    C::new("France", "FR", "FRA", Some(250), &[]),
    C::new("Gabon", "GA", "GAB", Some(266), &[]),
    C::new("Gambia", "GM", "GMB", Some(270), &["The Gambia", "Gambia, The"]),
    C::new("Georgia", "GE", "GEO", Some(268), &[]),
    C::new("Germany", "DE", "DEU", Some(276), &[]),
    C::new("Ghana", "GH", "GHA", Some(288), &[]),
    C::new("Greece", "GR", "GRC", Some(300), &[]),
    C::new("Grenada", "GD", "GRD", Some(308), &[]),
    C::new("Guatemala", "GT", "GTM", Some(320), &[]),
    C::new("Guinea", "GN", "GIN", Some(324), &[]),
    C::new("Guinea-Bissau", "GW", "GNB", Some(624), &[]),
    C::new("Guyana", "GY", "GUY", Some(328), &[]),
    C::new("Haiti", "HT", "HTI", Some(332), &[]),
    C::new("Holy See (Vatican City State)", "VA", "VAT", Some(336), &["Holy See", "Vatican City"]),
    C::new("Honduras", "HN", "HND", Some(340), &[]),
    C::new("Hong Kong", "HK", "HKG", Some(344), &[]),
    C::new("Hungary", "HU", "HUN", Some(348), &[]),
    C::new("Iceland", "IS", "ISL", Some(352), &[]),
    C::new("India", "IN", "IND", Some(356), &[]),
    C::new("Indonesia", "ID", "IDN", Some(360), &[]),
    C::new("Iran", "IR", "IRN", Some(364), &["Iran (Islamic Republic of)", "Islamic Republic of Iran"]),
    C::new("Iraq", "IQ", "IRQ", Some(368), &[]),
    C::new("Ireland", "IE", "IRL", Some(372), &["Republic of Ireland"]),
    C::new("Israel", "IL", "ISR", Some(376), &[]),
    C::new("Italy", "IT", "ITA", Some(380), &[]),
    C::new("Jamaica", "JM", "JAM", Some(388), &[]),
    C::new("Japan", "JP", "JPN", Some(392), &[]),
    C::new("Jordan", "JO", "JOR", Some(400), &[]),
    C::new("Kazakhstan", "KZ", "KAZ", Some(398), &[]),
    C::new("Kenya", "KE", "KEN", Some(404), &[]),
    C::new("Kiribati", "KI", "KIR", Some(296), &[]),
    C::new("Kosovo", "XK", "XKX", None, &[]),
    C::new("Kuwait", "KW", "KWT", Some(414), &[]),
    C::new("Kyrgyzstan", "KG", "KGZ", Some(417), &[]),
    C::new("Lao People's Democratic Republic", "LA", "LAO", Some(418), &["Laos"]),
    C::new("Latvia", "LV", "LVA", Some(428), &[]),
    C::new("Lebanon", "LB", "LBN", Some(422), &[]),
    C::new("Lesotho", "LS", "LSO", Some(426), &[]),
    C::new("Liberia", "LR", "LBR", Some(430), &[]),
    C::new("Libyan Arab Jamahiriya", "LY", "LBY", Some(434), &["Libya"]),
    C::new("Liechtenstein", "LI", "LIE", Some(438), &[]),
    C::new("Lithuania", "LT", "LTU", Some(440), &[]),
    C::new("Luxembourg", "LU", "LUX", Some(442), &[]),
    C::new("Macao", "MO", "MAC", Some(446), &["Macau"]),
    C::new("Macedonia", "MK", "MKD", Some(807), &["North Macedonia"]),
    C::new("Madagascar", "MG", "MDG", Some(450), &[]),
    C::new("Malawi", "MW", "MWI", Some(454), &[]),
    C::new("Malaysia", "MY", "MYS", Some(458), &[]),
    C::new("Maldives", "MV", "MDV", Some(462), &[]),
    C::new("Mali", "ML", "MLI", Some(466), &[]),
    C::new("Malta", "MT", "MLT", Some(470), &[]),
    C::new("Marshall Islands", "MH", "MHL", Some(584), &[]),
    C::new("Mauritania", "MR", "MRT", Some(478), &[]),
    C::new("Mauritius", "MU", "MUS", Some(480), &[]),
    C::new("Mexico", "MX", "MEX", Some(484), &[]),
    C::new("Micronesia", "FM", "FSM", Some(583), &["Federated States of Micronesia"]),
    C::new("Moldova", "MD", "MDA", Some(498), &["Republic of Moldova"]),
    C::new("Monaco", "MC", "MCO", Some(492), &[]),
    C::new("Mongolia", "MN", "MNG", Some(496), &[]),
    C::new("Montenegro", "ME", "MNE", Some(499), &[]),
    C::new("Morocco", "MA", "MAR", Some(504), &[]),
    C::new("Mozambique", "MZ", "MOZ", Some(508), &[]),
    C::new("Myanmar", "MM", "MMR", Some(104), &["Burma"]),
    C::new("Namibia", "NA", "NAM", Some(516), &[]),
    C::new("Nauru", "NR", "NRU", Some(520), &[]),
    C::new("Nepal", "NP", "NPL", Some(524), &[]),
    C::new("Netherlands", "NL", "NLD", Some(528), &["Holland"]),
    C::new("New Zealand", "NZ", "NZL", Some(554), &[]),
    C::new("Nicaragua", "NI", "NIC", Some(558), &[]),
    C::new("Niger", "NE", "NER", Some(562), &[]),
    C::new("Nigeria", "NG", "NGA", Some(566), &[]),
    C::new("North Korea", "KP", "PRK", Some(408), &["Korea, North", "DPRK"]),
    C::new("Norway", "NO", "NOR", Some(578), &[]),
    C::new("Oman", "OM", "OMN", Some(512), &[]),
    C::new("Pakistan", "PK", "PAK", Some(586), &[]),
    C::new("Palau", "PW", "PLW", Some(585), &[]),
    C::new("Palestine", "PS", "PSE", Some(275), &["West Bank and Gaza", "State of Palestine"]),
    C::new("Panama", "PA", "PAN", Some(591), &[]),
    C::new("Papua New Guinea", "PG", "PNG", Some(598), &[]),
    C::new("Paraguay", "PY", "PRY", Some(600), &[]),
    C::new("Peru", "PE", "PER", Some(604), &[]),
    C::new("Philippines", "PH", "PHL", Some(608), &[]),
    C::new("Poland", "PL", "POL", Some(616), &[]),
    C::new("Portugal", "PT", "PRT", Some(620), &[]),
    C::new("Qatar", "QA", "QAT", Some(634), &[]),
    C::new("Romania", "RO", "ROU", Some(642), &[]),
    C::new("Russia", "RU", "RUS", Some(643), &["Russian Federation"]),
    C::new("Rwanda", "RW", "RWA", Some(646), &[]),
    C::new("S. Korea", "KR", "KOR", Some(410), &["Korea, South", "South Korea", "Republic of Korea"]),
    C::new("Saint Kitts and Nevis", "KN", "KNA", Some(659), &[]),
    C::new("Saint Lucia", "LC", "LCA", Some(662), &[]),
    C::new("Saint Vincent and the Grenadines", "VC", "VCT", Some(670), &["St. Vincent Grenadines"]),
    C::new("Samoa", "WS", "WSM", Some(882), &[]),
    C::new("San Marino", "SM", "SMR", Some(674), &[]),
    C::new("Sao Tome and Principe", "ST", "STP", Some(678), &[]),
    C::new("Saudi Arabia", "SA", "SAU", Some(682), &["KSA"]),
    C::new("Senegal", "SN", "SEN", Some(686), &[]),
    C::new("Serbia", "RS", "SRB", Some(688), &[]),
    C::new("Seychelles", "SC", "SYC", Some(690), &[]),
    C::new("Sierra Leone", "SL", "SLE", Some(694), &[]),
    C::new("Singapore", "SG", "SGP", Some(702), &[]),
    C::new("Slovakia", "SK", "SVK", Some(703), &[]),
    C::new("Slovenia", "SI", "SVN", Some(705), &[]),
    C::new("Solomon Islands", "SB", "SLB", Some(90), &[]),
    C::new("Somalia", "SO", "SOM", Some(706), &[]),
    C::new("South Africa", "ZA", "ZAF", Some(710), &[]),
    C::new("South Sudan", "SS", "SSD", Some(728), &[]),
    C::new("Spain", "ES", "ESP", Some(724), &[]),
    C::new("Sri Lanka", "LK", "LKA", Some(144), &[]),
    C::new("Sudan", "SD", "SDN", Some(729), &[]),
    C::new("Suriname", "SR", "SUR", Some(740), &[]),
    C::new("Sweden", "SE", "SWE", Some(752), &[]),
    C::new("Switzerland", "CH", "CHE", Some(756), &[]),
    C::new("Syrian Arab Republic", "SY", "SYR", Some(760), &["Syria"]),
    C::new("Taiwan", "TW", "TWN", Some(158), &[]),
    C::new("Tajikistan", "TJ", "TJK", Some(762), &[]),
    C::new("Tanzania", "TZ", "TZA", Some(834), &["United Republic of Tanzania"]),
    C::new("Thailand", "TH", "THA", Some(764), &[]),
    C::new("Timor-Leste", "TL", "TLS", Some(626), &["East Timor"]),
    C::new("Togo", "TG", "TGO", Some(768), &[]),
    C::new("Tonga", "TO", "TON", Some(776), &[]),
    C::new("Trinidad and Tobago", "TT", "TTO", Some(780), &[]),
    C::new("Tunisia", "TN", "TUN", Some(788), &[]),
    C::new("Turkey", "TR", "TUR", Some(792), &["Turkiye", "Türkiye"]),
    C::new("Tuvalu", "TV", "TUV", Some(798), &[]),
    C::new("UAE", "AE", "ARE", Some(784), &["United Arab Emirates"]),
    C::new("Uganda", "UG", "UGA", Some(800), &[]),
    C::new("UK", "GB", "GBR", Some(826), &["United Kingdom", "Great Britain", "Britain"]),
    C::new("Ukraine", "UA", "UKR", Some(804), &[]),
    C::new("Uruguay", "UY", "URY", Some(858), &[]),
    C::new("USA", "US", "USA", Some(840), &["United States", "United States of America", "America"]),
    C::new("Uzbekistan", "UZ", "UZB", Some(860), &[]),
    C::new("Vanuatu", "VU", "VUT", Some(548), &[]),
    C::new("Venezuela", "VE", "VEN", Some(862), &["Bolivarian Republic of Venezuela"]),
    C::new("Vietnam", "VN", "VNM", Some(704), &[]),
    C::new("Yemen", "YE", "YEM", Some(887), &[]),
    C::new("Zambia", "ZM", "ZMB", Some(894), &[]),
    C::new("Zimbabwe", "ZW", "ZWE", Some(716), &[]),
];

//! Divisional Secretariat divisions of Sri Lanka, grouped by district.
//!
//! Order matters: auto-fill matching walks this table top to bottom and takes
//! the first hit.

pub static DISTRICT_DIVISIONS: &[(&str, &[&str])] = &[
    (
        "Ampara",
        &[
            "Addalachchenai",
            "Akkaraipattu",
            "Alayadiwembu",
            "Ampara",
            "Damana",
            "Dehiattakandiya",
            "Irakkamam",
            "Kalmunai Muslim",
            "Kalmunai Tamil",
            "Karaitivu",
            "Lahugala",
            "Mahaoya",
            "Navithanveli",
            "Nintavur",
            "Padiyathalawa",
            "Pothuvil",
            "Sainthamaruthu",
            "Sammanthurai",
            "Thirukkovil",
            "Uhana",
        ],
    ),
    (
        "Anuradhapura",
        &[
            "Galenbindunuwewa",
            "Galnewa",
            "Horowpothana",
            "Ipalogama",
            "Kahatagasdigiliya",
            "Kebithigollewa",
            "Kekirawa",
            "Mahavilachchiya",
            "Medawachchiya",
            "Mihinthale",
            "Nachchadoowa",
            "Nochchiyagama",
            "Nuwaragam Palatha Central",
            "Nuwaragam Palatha East",
            "Padaviya",
            "Palagala",
            "Palugaswewa",
            "Rajanganaya",
            "Rambewa",
            "Thalawa",
            "Thambuttegama",
            "Thirappane",
        ],
    ),
    (
        "Badulla",
        &[
            "Badulla",
            "Bandarawela",
            "Ella",
            "Haldummulla",
            "Hali-Ela",
            "Haputale",
            "Kandaketiya",
            "Lunugala",
            "Mahiyanganaya",
            "Meegahakivula",
            "Passara",
            "Rideemaliyadda",
            "Soranathota",
            "Uva Paranagama",
            "Welimada",
        ],
    ),
    (
        "Batticaloa",
        &[
            "Eravur Pattu",
            "Eravur Town",
            "Koralai Pattu",
            "Koralai Pattu Central",
            "Koralai Pattu North",
            "Koralai Pattu South",
            "Koralai Pattu West",
            "Manmunai North",
            "Manmunai Pattu",
            "Manmunai South and Eruvil Pattu",
            "Manmunai South West",
            "Manmunai West",
            "Porativu Pattu",
        ],
    ),
    (
        "Colombo",
        &[
            "Colombo",
            "Dehiwala",
            "Homagama",
            "Kaduwela",
            "Kesbewa",
            "Kolonnawa",
            "Maharagama",
            "Moratuwa",
            "Padukka",
            "Ratmalana",
            "Seethawaka",
            "Sri Jayawardanapura Kotte",
            "Thimbirigasyaya",
        ],
    ),
    (
        "Galle",
        &[
            "Akmeemana",
            "Ambalangoda",
            "Baddegama",
            "Balapitiya",
            "Benthota",
            "Bope-Poddala",
            "Elpitiya",
            "Galle Four Gravets",
            "Gonapinuwala",
            "Habaraduwa",
            "Hikkaduwa",
            "Imaduwa",
            "Karandeniya",
            "Nagoda",
            "Neluwa",
            "Niyagama",
            "Thawalama",
            "Welivitiya-Divithura",
            "Yakkalamulla",
        ],
    ),
    (
        "Gampaha",
        &[
            "Attanagalla",
            "Biyagama",
            "Divulapitiya",
            "Dompe",
            "Gampaha",
            "Ja-Ela",
            "Katana",
            "Kelaniya",
            "Mahara",
            "Minuwangoda",
            "Mirigama",
            "Negombo",
            "Wattala",
        ],
    ),
    (
        "Hambantota",
        &[
            "Ambalantota",
            "Angunakolapelessa",
            "Beliatta",
            "Hambantota",
            "Katuwana",
            "Lunugamvehera",
            "Okewela",
            "Sooriyawewa",
            "Tangalle",
            "Thissamaharama",
            "Walasmulla",
            "Weeraketiya",
        ],
    ),
    (
        "Jaffna",
        &[
            "Delft",
            "Island North",
            "Island South",
            "Jaffna",
            "Karainagar",
            "Nallur",
            "Thenmaradchi",
            "Vadamaradchi East",
            "Vadamaradchi North",
            "Vadamaradchi South-West",
            "Valikamam East",
            "Valikamam North",
            "Valikamam South",
            "Valikamam South-West",
            "Valikamam West",
        ],
    ),
    (
        "Kalutara",
        &[
            "Agalawatta",
            "Bandaragama",
            "Beruwala",
            "Bulathsinhala",
            "Dodangoda",
            "Horana",
            "Ingiriya",
            "Kalutara",
            "Madurawala",
            "Mathugama",
            "Millaniya",
            "Palindanuwara",
            "Panadura",
            "Walallavita",
        ],
    ),
    (
        "Kandy",
        &[
            "Akurana",
            "Delthota",
            "Doluwa",
            "Ganga Ihala Korale",
            "Gangawata Korale",
            "Harispattuwa",
            "Hatharaliyadda",
            "Kundasale",
            "Medadumbara",
            "Minipe",
            "Panvila",
            "Pasbage Korale",
            "Pathadumbara",
            "Pathahewaheta",
            "Poojapitiya",
            "Thumpane",
            "Udadumbara",
            "Udapalatha",
            "Udunuwara",
            "Yatinuwara",
        ],
    ),
    (
        "Kegalle",
        &[
            "Aranayaka",
            "Bulathkohupitiya",
            "Dehiovita",
            "Deraniyagala",
            "Galigamuwa",
            "Kegalle",
            "Mawanella",
            "Rambukkana",
            "Ruwanwella",
            "Warakapola",
            "Yatiyanthota",
        ],
    ),
    (
        "Kilinochchi",
        &["Kandavalai", "Karachchi", "Pachchilaipalli", "Poonakary"],
    ),
    (
        "Kurunegala",
        &[
            "Alawwa",
            "Ambanpola",
            "Bamunakotuwa",
            "Bingiriya",
            "Ehetuwewa",
            "Galgamuwa",
            "Ganewatta",
            "Giribawa",
            "Ibbagamuwa",
            "Kobeigane",
            "Kotavehera",
            "Kuliyapitiya East",
            "Kuliyapitiya West",
            "Kurunegala",
            "Mahawa",
            "Mallawapitiya",
            "Maspotha",
            "Mawathagama",
            "Narammala",
            "Nikaweratiya",
            "Panduwasnuwara East",
            "Panduwasnuwara West",
            "Pannala",
            "Polgahawela",
            "Polpithigama",
            "Rasnayakapura",
            "Rideegama",
            "Udubaddawa",
            "Wariyapola",
            "Weerambugedara",
        ],
    ),
    (
        "Mannar",
        &["Madhu", "Manthai West", "Mannar Town", "Musali", "Nanaddan"],
    ),
    (
        "Matale",
        &[
            "Ambanganga Korale",
            "Dambulla",
            "Galewela",
            "Laggala-Pallegama",
            "Matale",
            "Naula",
            "Pallepola",
            "Rattota",
            "Ukuwela",
            "Wilgamuwa",
            "Yatawatta",
        ],
    ),
    (
        "Matara",
        &[
            "Akuressa",
            "Athuraliya",
            "Devinuwara",
            "Dickwella",
            "Hakmana",
            "Kamburupitiya",
            "Kirinda Puhulwella",
            "Kotapola",
            "Malimbada",
            "Matara Four Gravets",
            "Mulatiyana",
            "Pasgoda",
            "Pitabeddara",
            "Thihagoda",
            "Weligama",
            "Welipitiya",
        ],
    ),
    (
        "Monaragala",
        &[
            "Badalkumbura",
            "Bibile",
            "Buttala",
            "Katharagama",
            "Madulla",
            "Medagama",
            "Monaragala",
            "Sevanagala",
            "Siyambalanduwa",
            "Thanamalvila",
            "Wellawaya",
        ],
    ),
    (
        "Mullaitivu",
        &[
            "Manthai East",
            "Maritimepattu",
            "Oddusuddan",
            "Puthukudiyiruppu",
            "Thunukkai",
            "Welioya",
        ],
    ),
    (
        "Nuwara Eliya",
        &[
            "Ambagamuwa",
            "Hanguranketha",
            "Kothmale",
            "Nuwara Eliya",
            "Walapane",
        ],
    ),
    (
        "Polonnaruwa",
        &[
            "Dimbulagala",
            "Elahera",
            "Hingurakgoda",
            "Lankapura",
            "Medirigiriya",
            "Thamankaduwa",
            "Welikanda",
        ],
    ),
    (
        "Puttalam",
        &[
            "Anamaduwa",
            "Arachchikattuwa",
            "Chilaw",
            "Dankotuwa",
            "Kalpitiya",
            "Karuwalagaswewa",
            "Madampe",
            "Mahakumbukkadawala",
            "Mahawewa",
            "Mundalama",
            "Nattandiya",
            "Nawagattegama",
            "Pallama",
            "Puttalam",
            "Wanathavilluwa",
            "Wennappuwa",
        ],
    ),
    (
        "Ratnapura",
        &[
            "Ayagama",
            "Balangoda",
            "Eheliyagoda",
            "Elapatha",
            "Embilipitiya",
            "Godakawela",
            "Imbulpe",
            "Kahawatta",
            "Kalawana",
            "Kiriella",
            "Kolonna",
            "Kuruwita",
            "Nivithigala",
            "Opanayaka",
            "Pelmadulla",
            "Ratnapura",
            "Weligepola",
        ],
    ),
    (
        "Trincomalee",
        &[
            "Gomarankadawala",
            "Kantale",
            "Kinniya",
            "Kuchchaveli",
            "Morawewa",
            "Muttur",
            "Padavi Sri Pura",
            "Seruvila",
            "Thambalagamuwa",
            "Trincomalee Town and Gravets",
            "Verugal",
        ],
    ),
    (
        "Vavuniya",
        &[
            "Vavuniya",
            "Vavuniya North",
            "Vavuniya South",
            "Vengalacheddikulam",
        ],
    ),
];

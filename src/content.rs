//! Static marketing content rendered on the landing page.

pub const COMPANY: &str = "Valdeci Alumínio";

pub struct Service {
    pub anchor: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub features: &'static [&'static str],
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub struct Highlight {
    pub icon: &'static str,
    pub color: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub initials: &'static str,
    pub review: &'static str,
    pub service: &'static str,
    pub color: &'static str,
}

pub struct Phone {
    pub display: &'static str,
    pub digits: &'static str,
}

impl Phone {
    pub fn tel(&self) -> String {
        format!("tel:+55{}", self.digits)
    }

    pub fn whatsapp(&self) -> String {
        format!("https://wa.me/55{}", self.digits)
    }
}

pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
    pub closed: bool,
}

pub struct ContactInfo {
    pub street: &'static str,
    pub district: &'static str,
    pub header_phone: Phone,
    pub phones: &'static [Phone],
    pub whatsapp: Phone,
    pub email: &'static str,
    pub opening_hours: &'static [OpeningHours],
}

macro_rules! unsplash {
    ($id:literal, $w:literal, $h:literal) => {
        concat!(
            "https://images.unsplash.com/",
            $id,
            "?auto=format&fit=crop&w=",
            $w,
            "&h=",
            $h
        )
    };
}

pub const HERO_IMAGE: &str = unsplash!("photo-1558618666-fcd25c85cd64", "1920", "1080");

pub const ABOUT_IMAGE: &str = unsplash!("photo-1581094794329-c8112a89af12", "800", "500");

pub const SERVICES: &[Service] = &[
    Service {
        anchor: "portoes",
        title: "Portões Automatizados",
        icon: "door-open",
        color: "primary",
        image: unsplash!("photo-1564013799919-ab600027ffc6", "800", "400"),
        image_alt: "Portão automatizado residencial",
        features: &[
            "Controle remoto e app mobile",
            "Sensor de segurança",
            "Bateria de emergência",
            "Garantia de 2 anos",
        ],
    },
    Service {
        anchor: "portas",
        title: "Portas de Alumínio",
        icon: "door-closed",
        color: "aluminum",
        image: unsplash!("photo-1586023492125-27b2c045efd7", "800", "400"),
        image_alt: "Porta de alumínio moderna",
        features: &[
            "Perfis de alta qualidade",
            "Vedação térmica e acústica",
            "Múltiplas cores disponíveis",
            "Resistente à corrosão",
        ],
    },
    Service {
        anchor: "vidros",
        title: "Soluções em Vidro",
        icon: "lightbulb",
        color: "glass-blue",
        image: unsplash!("photo-1497366216548-37526070297c", "800", "400"),
        image_alt: "Instalação profissional de vidros",
        features: &[
            "Vidro temperado e laminado",
            "Envidraçamento de sacadas",
            "Box para banheiro",
            "Manutenção e reparo",
        ],
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "500+",
        label: "Projetos Realizados",
    },
    Stat {
        value: "25+",
        label: "Anos de Experiência",
    },
    Stat {
        value: "100%",
        label: "Clientes Satisfeitos",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portão Residencial Automatizado",
        description: "Sistema completo com controle remoto e sensor de segurança",
        image: unsplash!("photo-1572120360610-d971b9d7767c", "800", "600"),
    },
    Project {
        title: "Fachada Comercial",
        description: "Portas de alumínio com vidro temperado para estabelecimento comercial",
        image: unsplash!("photo-1497366811353-6870744d04b2", "800", "600"),
    },
    Project {
        title: "Envidraçamento de Sacada",
        description: "Vidro temperado com perfis de alumínio para maior segurança",
        image: unsplash!("photo-1449824913935-59a10b8d2000", "800", "600"),
    },
    Project {
        title: "Estrutura Personalizada",
        description: "Projeto sob medida com acabamento de alta qualidade",
        image: unsplash!("photo-1504328345606-18bbc8c9d7d1", "800", "600"),
    },
    Project {
        title: "Portão Industrial",
        description: "Sistema automatizado para uso comercial intensivo",
        image: unsplash!("photo-1564013799919-ab600027ffc6", "800", "600"),
    },
    Project {
        title: "Box de Vidro Premium",
        description: "Instalação residencial com vidro temperado e ferragens especiais",
        image: unsplash!("photo-1560448204-e02f11c3d0e2", "800", "600"),
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "award",
        color: "primary",
        title: "Qualidade Certificada",
        description: "Todos os nossos produtos passam por rigoroso controle de qualidade e contam com certificação ISO.",
    },
    Highlight {
        icon: "users",
        color: "glass-blue",
        title: "Equipe Especializada",
        description: "Profissionais capacitados e em constante atualização com as mais modernas técnicas do mercado.",
    },
    Highlight {
        icon: "wrench",
        color: "aluminum",
        title: "Tecnologia Avançada",
        description: "Equipamentos de última geração para garantir precisão e acabamento perfeito em todos os projetos.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Maria Rosa",
        initials: "MR",
        review: "Excelente trabalho! O portão automatizado ficou perfeito e o atendimento foi impecável do início ao fim. Super recomendo!",
        service: "Portão Residencial Automatizado",
        color: "primary",
    },
    Testimonial {
        name: "João Silva",
        initials: "JS",
        review: "Profissionais muito competentes. A instalação das portas de alumínio ficou linda e dentro do prazo combinado.",
        service: "Portas Comerciais de Alumínio",
        color: "glass-blue",
    },
    Testimonial {
        name: "Ana Costa",
        initials: "AC",
        review: "O envidraçamento da sacada superou minhas expectativas. Qualidade top e preço justo. Muito satisfeita!",
        service: "Envidraçamento de Sacada",
        color: "aluminum",
    },
];

pub const CONTACT: ContactInfo = ContactInfo {
    street: "Rua Nossa Senhora da Vitória, nº 12",
    district: "Bairro Miritiua-Turu - São José de Ribamar, MA",
    header_phone: Phone {
        display: "(98) 98438-6469",
        digits: "98984386469",
    },
    phones: &[
        Phone {
            display: "(98) 98463-3834",
            digits: "98984633834",
        },
        Phone {
            display: "(98) 99611-7115",
            digits: "98996117115",
        },
    ],
    whatsapp: Phone {
        display: "(98) 98463-3834",
        digits: "98984633834",
    },
    email: "contato@valdeci.com.br",
    opening_hours: &[
        OpeningHours {
            days: "Segunda a Sexta:",
            hours: "8h às 18h",
            closed: false,
        },
        OpeningHours {
            days: "Sábado:",
            hours: "8h às 18h",
            closed: false,
        },
        OpeningHours {
            days: "Domingo:",
            hours: "Fechado",
            closed: true,
        },
    ],
};

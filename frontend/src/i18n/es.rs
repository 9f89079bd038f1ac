use super::{Entry, Faq, FormCopy, FundAllocation, ModalCopy, Product, Translations};

pub static ES: Translations = Translations {
    hero_title: [
        "Tecnologías *Patentadas*",
        "Revolucionando el Cuidado",
        "de la Piel Sensible",
    ],
    hero_subtitle: "Nanotecnología brasileña con validación científica internacional",
    investment_badge: "Ronda de Inversión Abierta",
    cta_button: "Conocer Oportunidad",

    numbers_title: "Números que Definen el Futuro",
    numbers_subtitle: "Una trayectoria consistente de crecimiento e innovación",
    market_label: "Mercado Latinoamericano",
    valuation_label: "Valuación",
    patents_label: "Patentes INPI",
    growth_label: "Crecimiento 3 Años",
    global_market: "Mercado Global Fitoterapéuticos: $13.75 billones (CAGR 25% | 2023-2033)",

    problem_title: "El Problema",
    problem_subtitle: "Un mercado gigantesco completamente desatendido",
    problem_description: "Millones de brasileños con necesidades especiales de cuidados dermatológicos",
    problem_list: [
        "Los productos convencionales no satisfacen necesidades específicas",
        "Tratamientos especializados con alto costo y baja accesibilidad",
        "Mercado desatendido con pocas soluciones tecnológicas",
        "Falta de conocimiento sobre preparación adecuada de la piel",
    ],

    solution_title: "Nuestra Solución",
    solution_subtitle: [
        "Ecosistema que alinea tecnología farmacéutica,",
        "tecnología digital y apoyo emocional",
    ],
    solution_patents: "Dos patentes valoradas en $37M",
    products: [
        Product {
            name: "BIOCIC",
            title: "Nanotecnología Regenerativa",
            description: "Biomimética que garantiza absorción a nivel celular y regeneración 2x más rápida",
        },
        Product {
            name: "BIOBLOC",
            title: "Limpieza Sensible",
            description: "Tecnología de limpieza con pH syndet que preserva la barrera cutánea",
        },
        Product {
            name: "IA NARA",
            title: "Inteligencia Artificial",
            description: "Seguimiento personalizado de la evolución de la piel del paciente",
        },
    ],

    validation_title: "Validación Científica y de Mercado",
    validation_subtitle: "Comprobación en instituciones de referencia internacional",
    validation_stats: [
        Entry {
            title: "Hospitales Socios",
            description: "Hospital do Amor, HC-UFMG/USP, Hospital da Baleia",
        },
        Entry {
            title: "Publicaciones Internacionales",
            description: "Artículos científicos en revistas de alto impacto",
        },
        Entry {
            title: "Pacientes Atendidos",
            description: "Validación clínica con resultados comprobados",
        },
        Entry {
            title: "Productos en el Mercado",
            description: "Portafolio completo registrado en ANVISA",
        },
    ],

    growth_title: "Trayectoria de Crecimiento",
    growth_subtitle: "Crecimiento exponencial comprobado año tras año",
    growth_milestones: [
        Entry {
            title: "Inicio del Camino",
            description: "Primeros productos en el mercado con tecnología BIOCIC/BIOBLOC",
        },
        Entry {
            title: "Validación Clínica",
            description: "Alianzas con hospitales de renombre confirman la eficacia",
        },
        Entry {
            title: "Expansión Actual",
            description: "11 productos ANVISA, crecimiento sostenido",
        },
        Entry {
            title: "Meta de Inversión",
            description: "Duplicar ingresos con los recursos de la ronda",
        },
        Entry {
            title: "Aceleración",
            description: "34 formulaciones en el mercado farmacéutico",
        },
        Entry {
            title: "Consolidación",
            description: "Líder en piel sensible en Brasil",
        },
    ],
    growth_actual: "Realizado",
    growth_projection: "Proyección",
    growth_rate: "crecimiento",
    play: "Reproducir",
    pause: "Pausar",

    investment_title: "Oportunidad de Inversión",
    investment_subtitle: "Participa en la revolución del cuidado dermatológico brasileño",
    modality: "Modalidad",
    modality_value: "Pagaré Convertible",
    capture_goal: "Meta de Captación",
    minimum_ticket: "Ticket Mínimo",
    investment_format: "Formato",
    investment_format_value: "20 tickets de $100k",
    term: "Período de Ronda",
    term_value: "01/08 hasta 15/08",

    protection_title: "Protección al Inversor",
    protection_subtitle: "Gobernanza sólida y derechos garantizados",
    protections: [
        Entry {
            title: "Gobernanza",
            description: "Asiento en Consejo + derechos de veto para inversiones >$200k",
        },
        Entry {
            title: "Derechos de Información",
            description: "Reportes mensuales + acceso a métricas operacionales",
        },
        Entry {
            title: "Tag Along",
            description: "Derecho a vender en mismas condiciones que fundadores",
        },
        Entry {
            title: "Vesting Fundadores",
            description: "Cronograma de 4 años que garantiza compromiso",
        },
        Entry {
            title: "Anti-Dilución",
            description: "Protección full-ratchet contra down rounds",
        },
        Entry {
            title: "Seguimiento",
            description: "Entrada al grupo de inversores y acceso al panel trimestral de performance",
        },
    ],

    funds_title: "Uso Detallado de los Recursos",
    funds_subtitle: "Transparencia total en la aplicación del capital",
    funds_overview: "Inversión estratégica para acelerar crecimiento y consolidar liderazgo tecnológico",
    fund_allocations: [
        FundAllocation {
            title: "Fábrica y Tecnología",
            items: [
                "Equipos de nanotecnología",
                "Sistemas GMP",
                "Certificaciones internacionales",
            ],
            impact_label: "Capacidad de producción",
            impact_value: "1M+ unidades/año",
        },
        FundAllocation {
            title: "Expansión Comercial",
            items: [
                "B2C: Consumidor final via 5.000+ farmacias",
                "B2B: Clínicas y consultorios médicos",
                "B2G: Licitaciones SUS y hospitales públicos",
            ],
            impact_label: "Puntos de venta",
            impact_value: "5.000+ farmacias",
        },
        FundAllocation {
            title: "Nuevos Productos",
            items: [
                "Registro de 34 SKUs desarrollados en ANVISA",
                "Desarrollo de envases y marketing",
                "Estudios de estabilidad y validación",
            ],
            impact_label: "Portafolio completo",
            impact_value: "34 SKUs nuevos",
        },
        FundAllocation {
            title: "Estratégico y Reserva",
            items: [
                "Capital de trabajo y contingencia",
                "Oportunidades estratégicas",
                "Preparación para Serie A",
            ],
            impact_label: "Flexibilidad",
            impact_value: "18 meses de runway",
        },
    ],

    timeline_title: "Cronograma de Ejecución",
    timeline_subtitle: "Estrategia clara para los próximos 24 meses",
    timeline: [
        Entry {
            title: "Mes 1-2: Preparación para Captación",
            description: "Finalización de documentación, ajuste de expectativas de valoración, y preparación del pitch deck y data room.",
        },
        Entry {
            title: "Mes 3-4: Roadshow y Negociación",
            description: "Presentaciones a inversores, negociación de términos, y due diligence.",
        },
        Entry {
            title: "Mes 5-6: Cierre y Planificación",
            description: "Firma de documentos, recepción de recursos y detallado del plan de ejecución.",
        },
        Entry {
            title: "Mes 7-12: Construcción de Fábrica",
            description: "Inicio de construcción de fábrica, adquisición de equipos, y contratación de equipo técnico.",
        },
        Entry {
            title: "Mes 13-18: Expansión Comercial",
            description: "Lanzamiento de nuevos productos, expansión de canales de distribución, e inicio de operación de fábrica.",
        },
        Entry {
            title: "Mes 18-24: Preparación para Serie A",
            description: "Consolidación de métricas de crecimiento, expansión internacional, y preparación para próxima ronda de captación.",
        },
    ],

    roi_title: "Calculadora de ROI",
    roi_subtitle: "Proyecta tu retorno sobre la inversión basado en premisas fijas",
    investment_value: "Monto de Inversión",
    equity_participation: "Participación Societaria",
    investment_period: "Período de Inversión",
    years: "años",
    growth_scenario: "Escenario de Crecimiento",
    realistic: "Escenario Base",
    optimistic: "Escenario Ascendente",
    scenario_assumptions: "Premisas del Escenario Seleccionado:",
    realistic_assumptions: [
        "ROI Total: 99,31% (5 años)",
        "Múltiplo de salida: 1,9931x",
        "Retorno anualizado: 14,79% a.a.",
        "Valuación Post-Money: $29,1M",
    ],
    optimistic_assumptions: [
        "ROI Total: 199% (5 años)",
        "Múltiplo de salida: 2,99x",
        "Retorno anualizado: 24,48% a.a.",
        "Valuación Post-Money: $29,1M",
    ],
    initial_investment: "Inversión Inicial",
    final_value_label: "Valor Final Estimado",
    total_return: "Retorno Total",
    total_roi: "ROI Total",
    annualized_return: "Retorno Anualizado",
    per_year: "a.a.",
    roi_warning: "⚠️ Aviso Importante",
    risk_disclaimer: "Las proyecciones presentadas son estimaciones basadas en premisas de mercado y desempeño esperado. Las inversiones en startups involucran riesgos significativos y los retornos no están garantizados. El rendimiento pasado no es indicativo de resultados futuros.",

    cta_title: "Sé Parte de Esta Historia",
    cta_description: [
        "Invierte en tecnología patentada con +10 años de investigación",
        "Ronda limitada: 01/08 hasta 15/08 • Ticket mínimo: $100k",
    ],
    cta_primary: "Quiero Invertir",
    download_presentation: "Descargar Presentaciones y Material Gráfico",

    form: FormCopy {
        title: "Registro de Inversor",
        subtitle: "Completa tu información para participar en las oportunidades de inversión de Pele Rara",
        step_titles: [
            "Información Personal",
            "Dirección",
            "Información Financiera",
            "Detalles de la Inversión",
            "Términos y Confirmación",
        ],
        step_counter: "Paso",
        step_of: "de",

        qualification_section: "Calificación como Inversor (CVM)",
        terms_section: "Términos y Condiciones",

        full_name: "Nombre Completo",
        email: "Email",
        phone: "Teléfono",
        cpf: "CPF",
        rg: "RG",
        birth_date: "Fecha de Nacimiento",
        nationality: "Nacionalidad",
        address: "Dirección Completa",
        city: "Ciudad",
        state: "Estado",
        zip_code: "Código Postal",
        country: "País",
        occupation: "Ocupación",
        company: "Empresa",
        position: "Cargo",
        work_experience: "Años de Experiencia",
        monthly_income: "Ingresos Mensuales",
        total_assets: "Patrimonio Total",
        investment_experience: "Experiencia en Inversiones",
        risk_profile: "Perfil de Riesgo",
        intended_investment: "Monto de Inversión Previsto",
        investment_horizon: "Horizonte de Inversión",
        motivations: "Motivaciones para Invertir",
        accredited_status: "Estado de Inversor Calificado",
        accreditation_proof: "Comprobación de Calificación",
        professional_certification: "Certificaciones Profesionales",
        how_did_you_hear: "¿Cómo supiste de Pele Rara?",
        additional_comments: "Comentarios Adicionales",

        full_name_placeholder: "Tu nombre completo",
        email_placeholder: "tu@email.com",
        phone_placeholder: "(11) 99999-9999",
        cpf_placeholder: "000.000.000-00",
        rg_placeholder: "00.000.000-0",
        address_placeholder: "Calle, número, complemento",
        city_placeholder: "Tu ciudad",
        zip_code_placeholder: "00000-000",
        occupation_placeholder: "Tu profesión",
        company_placeholder: "Nombre de la empresa",
        position_placeholder: "Tu cargo",
        motivations_placeholder: "Describe tus motivaciones y expectativas para esta inversión",
        certification_placeholder: "Ej: CPA-20, CFA, CNPI (si aplica)",
        comments_placeholder: "Información adicional, preguntas o comentarios",

        select_option: "Seleccionar...",
        select_state: "Seleccionar estado",
        select_income_range: "Selecciona tu rango de ingresos",
        select_assets_range: "Selecciona tu rango de patrimonio",
        select_investment_value: "Seleccionar monto",
        select_qualification_proof: "¿Cómo puedes comprobarlo?",

        work_experience_options: [
            "0-2 años",
            "3-5 años",
            "6-10 años",
            "11-15 años",
            "16-20 años",
            "Más de 20 años",
        ],
        income_options: [
            "Hasta $1,000",
            "$1,001 - $2,000",
            "$2,001 - $4,000",
            "$4,001 - $10,000",
            "$10,001 - $20,000",
            "Más de $20,000",
        ],
        assets_options: [
            "Hasta $20,000",
            "$20,001 - $60,000",
            "$60,001 - $200,000",
            "$200,001 - $1,000,000",
            "$1,000,001 - $2,000,000",
            "Más de $2,000,000",
        ],
        investment_experience_options: [
            "Principiante (ahorros, CDT)",
            "Intermedio (fondos, acciones)",
            "Avanzado (derivados, FIPs)",
            "Profesional (gestión de recursos)",
        ],
        risk_profile_options: ["Conservador", "Moderado", "Agresivo", "Súper Agresivo"],
        investment_value_options: [
            "$10,000 - $20,000",
            "$20,001 - $50,000",
            "$50,001 - $100,000",
            "$100,001 - $200,000",
            "$200,001 - $400,000",
            "Más de $400,000",
        ],
        investment_horizon_options: ["3 - 5 años", "5-10 años", "Más de 10 años"],
        accredited_status_options: [
            "Poseo patrimonio financiero de al menos $200,000",
            "Poseo certificación profesional (CPA-20, CFA, CNPI, etc.)",
            "Soy profesional del mercado financiero",
            "Necesito verificar mi calificación",
        ],
        accreditation_proof_options: [
            "Estado de cuenta de corretaje",
            "Declaración de impuestos",
            "Certificado profesional",
            "Carta del empleador",
            "Otros documentos",
        ],
        how_did_you_hear_options: [
            "LinkedIn",
            "Google",
            "Referencia",
            "Medios (periódico, revista)",
            "Evento",
            "Sitio web de la empresa",
            "Otros",
        ],

        qualified_warning_title: "Aviso Importante",
        qualified_warning_text: "Esta inversión implica riesgos significativos y puede resultar en la pérdida total del capital invertido. Lea atentamente todos los documentos antes de tomar su decisión de inversión.",

        agree_terms: "Acepto los Términos de Uso y declaro estar consciente de los riesgos asociados con inversiones en empresas de capital cerrado",
        agree_privacy: "Acepto la Política de Privacidad y autorizo el tratamiento de mis datos conforme a LGPD",
        confirm_accuracy: "Declaro que toda la información proporcionada es verdadera y precisa",
        authorize_contact: "Autorizo a Pele Rara a contactarme para presentar oportunidades de inversión",

        previous: "Anterior",
        next: "Siguiente",
        submit: "Enviar Registro",
        submitting: "Enviando...",

        missing_field: "Completa el campo obligatorio:",
        missing_consents: "Por favor, acepta todos los términos obligatorios.",
        relay_success: "✅ ¡Formulario enviado con éxito!",
        fallback_opened: "📧 Abriendo tu cliente de email para enviar el formulario...",

        interest_registered: "¡Interés Registrado con Éxito!",
        relay_success_detail: "Tu formulario de registro fue enviado al email",
        next_steps_title: "Próximos Pasos:",
        next_steps: [
            "Nuestro equipo analizará tu información en hasta 24 horas hábiles",
            "Recibirás un NDA (Acuerdo de Confidencialidad) para firmar",
            "Agendaremos una reunión para la presentación detallada de la oportunidad",
            "Iniciaremos el proceso de due diligence y documentación",
        ],
        email_opened_automatically: "Su cliente de email se abrió automáticamente con toda la información completada.",
        recipient_email: "Destinatario:",
        whatsapp_contact: "WhatsApp:",
        email_not_opened: "Si el email no se abrió automáticamente, haga clic en el botón de abajo:",
        open_email_button: "Abrir Email para Cynthia",
        submit_new_interest: "Enviar Nuevo Interés",
    },

    modal: ModalCopy {
        title: "¿Cómo deseas invertir?",
        subtitle: "Elige la mejor forma de ponerte en contacto con nosotros",
        minimum_badge: "Inversión mínima: $100k",
        recommended: "Recomendado",
        form_title: "Registro de Inversor Calificado",
        official_contact: "Contacto oficial:",
        register_title: "Registro Completo de Inversor",
        register_description: "Formulario completo con verificación de inversor calificado",
        whatsapp_title: "WhatsApp Directo",
        whatsapp_description: "Habla ahora mismo con nuestro equipo",
        email_title: "Email para Reunión",
        email_description: "Enviar interés por email",
        website_title: "Sitio Oficial",
        website_description: "Conocer más sobre la empresa",
        back: "← Volver",
        close: "Cerrar",
    },

    faq_title: "Preguntas Frecuentes de Inversores",
    faq_subtitle: "Aclaramos las principales dudas sobre la oportunidad",
    faq_contact: "¿Tienes otras preguntas?",
    faq_contact_link: "Contáctanos",
    faq: [
        Faq {
            question: "¿Cuál es la ventaja competitiva de Pele Rara?",
            answer: "Tenemos dos tecnologías patentadas (BIOCIC y BIOBLOC) con validación científica internacional, alianzas con hospitales de referencia y un mercado de $3.7 billones globalmente. Nuestra nanotecnología propietaria ofrece resultados 2x más rápidos que productos convencionales.",
        },
        Faq {
            question: "¿Cómo funciona el pagaré convertible?",
            answer: "La inversión se realizará vía pagaré convertible con plazo de 24 meses, valuación cap de $40M y descuento del 30%. En la próxima ronda (Serie A), el monto se convierte automáticamente en participación accionaria con condiciones ventajosas para el inversor.",
        },
        Faq {
            question: "¿Cuáles son las garantías para el inversor?",
            answer: "Ofrecemos garantías sólidas: patentes depositadas en INPI (valor entre $19-37M), productos ya registrados en ANVISA, ingresos recurrentes comprobados, contratos con hospitales y un plan de negocios detallado con metas claras de crecimiento.",
        },
        Faq {
            question: "¿Cuál es la estrategia de salida para inversores?",
            answer: "Planeamos Serie A en 24 meses, con posibilidad de IPO en 5-7 años o adquisición estratégica por multinacionales farmacéuticas. El mercado de dermocosméticos tiene múltiplos históricos de 15-25x EBITDA en transacciones similares.",
        },
        Faq {
            question: "¿Cómo se utilizará el capital recaudado?",
            answer: "$800k para construcción de fábrica de nanopartículas, $800k para expansión comercial (B2C/B2B/B2G) y $400k para lanzamiento de los 34 SKUs ya desarrollados. Con ticket mínimo de $100k, cada dólar invertido tiene ROI proyectado superior a 10x en 5 años.",
        },
        Faq {
            question: "¿Cuál es el estatus regulatorio de los productos?",
            answer: "Ya tenemos 11 productos registrados en ANVISA y 34 formulaciones más desarrolladas listas para registro. Nuestras patentes están depositadas en INPI y tenemos estudios clínicos aprobados en comités de ética de hospitales universitarios.",
        },
    ],

    footer_text: "Nuestra piel es nuestra historia",
    footer_motto: "Celebramos cada marca",
    footer_additional: "AL FINAL, SOLO TIENEN CICATRICES QUIENES SOBREVIVIERON",

    investment_email_subject: "Interés en Invertir - Pele Rara",
    investment_email_body: "Me gustaría programar una reunión para conocer la oportunidad de inversión.\n\nNombre:\nTeléfono:\nEmpresa:\nTicket de Interés:",
    whatsapp_message: "¡Hola! Tengo interés en la oportunidad de inversión de Pele Rara. Me gustaría programar una reunión para conocer más detalles.",
    whatsapp_tooltip: "Habla con nosotros por WhatsApp",
    language_selector_label: "Idioma",
    image_unavailable: "Imagen no disponible",
    not_found_title: "Página no encontrada",
    not_found_text: "La dirección solicitada no existe.",
    back_home: "Volver al inicio",
};

use super::{Entry, Faq, FormCopy, FundAllocation, ModalCopy, Product, Translations};

pub static PT_BR: Translations = Translations {
    hero_title: [
        "Tecnologias *Patenteadas*",
        "Revolucionando o Cuidado",
        "com a Pele Sensível",
    ],
    hero_subtitle: "Nanotecnologia brasileira com validação científica internacional",
    investment_badge: "Rodada de Investimento Aberta",
    cta_button: "Conhecer Oportunidade",

    numbers_title: "Números que Definem o Futuro",
    numbers_subtitle: "Uma trajetória consistente de crescimento e inovação",
    market_label: "Mercado Brasileiro",
    valuation_label: "Valuation",
    patents_label: "Patentes INPI",
    growth_label: "Crescimento 3 Anos",
    global_market: "Mercado Global Fitoterápicos: US$ 13,75 bilhões (CAGR 25% | 2023-2033)",

    problem_title: "O Problema",
    problem_subtitle: "Um mercado gigantesco completamente desatendido",
    problem_description: "Milhões de brasileiros com necessidades especiais de cuidados dermatológicos",
    problem_list: [
        "Produtos convencionais não atendem necessidades específicas",
        "Tratamentos especializados com alto custo e baixa acessibilidade",
        "Mercado subatendido com poucas soluções tecnológicas",
        "Falta de conhecimento sobre preparo adequado da pele",
    ],

    solution_title: "Nossa Solução",
    solution_subtitle: [
        "Ecossistema que alinha tecnologia farmacêutica,",
        "tecnologia digital e acolhimento emocional",
    ],
    solution_patents: "Duas patentes avaliadas em R$ 183M",
    products: [
        Product {
            name: "BIOCIC",
            title: "Nanotecnologia Regenerativa",
            description: "Biomimética que garante absorção a nível celular e regeneração 2x mais rápida",
        },
        Product {
            name: "BIOBLOC",
            title: "Limpeza Sensível",
            description: "Tecnologia de limpeza com pH syndet que preserva a barreira cutânea",
        },
        Product {
            name: "IA NARA",
            title: "Inteligência Artificial",
            description: "Acompanhamento personalizado da evolução da pele do paciente",
        },
    ],

    validation_title: "Validação Científica e Mercado",
    validation_subtitle: "Comprovação em instituições de referência internacional",
    validation_stats: [
        Entry {
            title: "Hospitais Parceiros",
            description: "Hospital do Amor, HC-UFMG/USP, Hospital da Baleia",
        },
        Entry {
            title: "Publicações Internacionais",
            description: "Artigos científicos em periódicos de alto impacto",
        },
        Entry {
            title: "Pacientes Atendidos",
            description: "Validação clínica com resultados comprovados",
        },
        Entry {
            title: "Produtos no Mercado",
            description: "Portfolio completo registrado na ANVISA",
        },
    ],

    growth_title: "Trajetória de Crescimento",
    growth_subtitle: "Crescimento exponencial comprovado ano após ano",
    growth_milestones: [
        Entry {
            title: "Início da Jornada",
            description: "Primeiros produtos no mercado com tecnologia BIOCIC/BIOBLOC",
        },
        Entry {
            title: "Validação Clínica",
            description: "Parcerias com hospitais renomados confirmam eficácia",
        },
        Entry {
            title: "Expansão Atual",
            description: "11 produtos ANVISA, crescimento sustentado",
        },
        Entry {
            title: "Meta de Investimento",
            description: "Dobrar receita com recursos da rodada",
        },
        Entry {
            title: "Aceleração",
            description: "34 formulações no mercado farmacêutico",
        },
        Entry {
            title: "Consolidação",
            description: "Líder em pele sensível no Brasil",
        },
    ],
    growth_actual: "Realizado",
    growth_projection: "Projeção",
    growth_rate: "crescimento",
    play: "Reproduzir",
    pause: "Pausar",

    investment_title: "Oportunidade de Investimento",
    investment_subtitle: "Participe da revolução do cuidado dermatológico brasileiro",
    modality: "Modalidade",
    modality_value: "Mútuo Conversível",
    capture_goal: "Meta de Captação",
    minimum_ticket: "Ticket Mínimo",
    investment_format: "Formato",
    investment_format_value: "20 cotas de R$ 500k",
    term: "Prazo da Rodada",
    term_value: "10/08 até 10/09",

    protection_title: "Proteção ao Investidor",
    protection_subtitle: "Governança sólida e direitos garantidos",
    protections: [
        Entry {
            title: "Governança",
            description: "Assento no Conselho + direitos de veto para investimentos >R$ 1M",
        },
        Entry {
            title: "Direitos de Informação",
            description: "Relatórios mensais + acesso a métricas operacionais",
        },
        Entry {
            title: "Tag Along",
            description: "Direito de vender nas mesmas condições dos fundadores",
        },
        Entry {
            title: "Vesting Fundadores",
            description: "Cronograma 4 anos garantindo comprometimento",
        },
        Entry {
            title: "Anti-Diluição",
            description: "Proteção full-ratchet contra down rounds",
        },
        Entry {
            title: "Acompanhamento",
            description: "Entrada no grupo de investidores e acesso ao painel trimestral de performance",
        },
    ],

    funds_title: "Uso Detalhado dos Recursos",
    funds_subtitle: "Transparência total na aplicação do capital",
    funds_overview: "Investimento estratégico para acelerar crescimento e consolidar liderança tecnológica",
    fund_allocations: [
        FundAllocation {
            title: "Fábrica & Tecnologia",
            items: [
                "Equipamentos nanotecnologia",
                "Sistemas GMP",
                "Certificações internacionais",
            ],
            impact_label: "Capacidade de produção",
            impact_value: "1M+ unidades/ano",
        },
        FundAllocation {
            title: "Expansão Comercial",
            items: [
                "B2C: Consumidor final via 5.000+ farmácias",
                "B2B: Clínicas e consultórios médicos",
                "B2G: Licitações SUS e hospitais públicos",
            ],
            impact_label: "Pontos de venda",
            impact_value: "5.000+ farmácias",
        },
        FundAllocation {
            title: "Novos Produtos",
            items: [
                "Registro de 34 SKUs desenvolvidos na ANVISA",
                "Desenvolvimento de embalagens e marketing",
                "Estudos de estabilidade e validação",
            ],
            impact_label: "Portfolio completo",
            impact_value: "34 SKUs novos",
        },
        FundAllocation {
            title: "Estratégico & Reserva",
            items: [
                "Capital de giro e contingência",
                "Oportunidades estratégicas",
                "Preparação para Série A",
            ],
            impact_label: "Flexibilidade",
            impact_value: "18 meses de runway",
        },
    ],

    timeline_title: "Cronograma de Execução",
    timeline_subtitle: "Estratégia clara para os próximos 24 meses",
    timeline: [
        Entry {
            title: "Mês 1-2: Preparação para Captação",
            description: "Finalização da documentação, ajuste de expectativas de avaliação, e preparação do pitch deck e data room.",
        },
        Entry {
            title: "Mês 3-4: Roadshow e Negociação",
            description: "Apresentações para investidores, negociação de termos, e due diligence.",
        },
        Entry {
            title: "Mês 5-6: Fechamento e Planejamento",
            description: "Assinatura de documentos, recebimento de recursos e detalhamento do plano de execução.",
        },
        Entry {
            title: "Mês 7-12: Construção da Fábrica",
            description: "Início da construção da fábrica, aquisição de equipamentos, e contratação de equipe técnica.",
        },
        Entry {
            title: "Mês 13-18: Expansão Comercial",
            description: "Lançamento de novos produtos, expansão de canais de distribuição, e início de operação da fábrica.",
        },
        Entry {
            title: "Mês 18-24: Preparação para Série A",
            description: "Consolidação de métricas de crescimento, expansão internacional, e preparação para próxima rodada de captação.",
        },
    ],

    roi_title: "Calculadora de ROI",
    roi_subtitle: "Projete seu retorno sobre investimento baseado em premissas fixas",
    investment_value: "Valor do Investimento",
    equity_participation: "Participação Societária",
    investment_period: "Período de Investimento",
    years: "anos",
    growth_scenario: "Cenário de Crescimento",
    realistic: "Cenário Base",
    optimistic: "Cenário Ascendente",
    scenario_assumptions: "Premissas do Cenário Selecionado:",
    realistic_assumptions: [
        "ROI Total: 99,31% (5 anos)",
        "Múltiplo de saída: 1,9931x",
        "Retorno anualizado: 14,79% a.a.",
        "Valuation Post-Money: R$ 145,4M",
    ],
    optimistic_assumptions: [
        "ROI Total: 199% (5 anos)",
        "Múltiplo de saída: 2,99x",
        "Retorno anualizado: 24,48% a.a.",
        "Valuation Post-Money: R$ 145,4M",
    ],
    initial_investment: "Investimento Inicial",
    final_value_label: "Valor Final Estimado",
    total_return: "Retorno Total",
    total_roi: "ROI Total",
    annualized_return: "Retorno Anualizado",
    per_year: "a.a.",
    roi_warning: "⚠️ Aviso Importante",
    risk_disclaimer: "As projeções apresentadas são estimativas baseadas em premissas de mercado e desempenho esperado. Investimentos em startups envolvem riscos significativos e os retornos não são garantidos. Rentabilidade passada não é garantia de resultados futuros.",

    cta_title: "Faça Parte Desta História",
    cta_description: [
        "Invista em tecnologia patenteada com +10 anos de pesquisa",
        "Rodada limitada: 01/08 até 15/08 • Ticket mínimo: R$ 500 mil",
    ],
    cta_primary: "Quero Investir",
    download_presentation: "Baixar Apresentações e Material Gráfico",

    form: FormCopy {
        title: "Registro de Investidor",
        subtitle: "Preencha suas informações para participar das oportunidades de investimento da Pele Rara",
        step_titles: [
            "Informações Pessoais",
            "Endereço",
            "Informações Financeiras",
            "Detalhes do Investimento",
            "Termos e Confirmação",
        ],
        step_counter: "Etapa",
        step_of: "de",

        qualification_section: "Qualificação como Investidor (CVM)",
        terms_section: "Termos e Condições",

        full_name: "Nome Completo",
        email: "Email",
        phone: "Telefone",
        cpf: "CPF",
        rg: "RG",
        birth_date: "Data de Nascimento",
        nationality: "Nacionalidade",
        address: "Endereço Completo",
        city: "Cidade",
        state: "Estado",
        zip_code: "CEP",
        country: "País",
        occupation: "Ocupação",
        company: "Empresa",
        position: "Cargo",
        work_experience: "Anos de Experiência",
        monthly_income: "Renda Mensal",
        total_assets: "Patrimônio Total",
        investment_experience: "Experiência em Investimentos",
        risk_profile: "Perfil de Risco",
        intended_investment: "Valor Pretendido de Investimento",
        investment_horizon: "Horizonte de Investimento",
        motivations: "Motivações para Investir",
        accredited_status: "Status de Investidor Qualificado",
        accreditation_proof: "Comprovação de Qualificação",
        professional_certification: "Certificações Profissionais",
        how_did_you_hear: "Como soube da Pele Rara?",
        additional_comments: "Comentários Adicionais",

        full_name_placeholder: "Seu nome completo",
        email_placeholder: "seu@email.com",
        phone_placeholder: "(11) 99999-9999",
        cpf_placeholder: "000.000.000-00",
        rg_placeholder: "00.000.000-0",
        address_placeholder: "Rua, número, complemento",
        city_placeholder: "Sua cidade",
        zip_code_placeholder: "00000-000",
        occupation_placeholder: "Sua profissão",
        company_placeholder: "Nome da empresa",
        position_placeholder: "Seu cargo",
        motivations_placeholder: "Descreva suas motivações e expectativas para este investimento",
        certification_placeholder: "Ex: CPA-20, CFA, CNPI (se aplicável)",
        comments_placeholder: "Informações adicionais, dúvidas ou comentários",

        select_option: "Selecione...",
        select_state: "Selecione o estado",
        select_income_range: "Selecione sua faixa de renda",
        select_assets_range: "Selecione sua faixa de patrimônio",
        select_investment_value: "Selecione o valor",
        select_qualification_proof: "Como pode comprovar?",

        work_experience_options: [
            "0-2 anos",
            "3-5 anos",
            "6-10 anos",
            "11-15 anos",
            "16-20 anos",
            "Mais de 20 anos",
        ],
        income_options: [
            "Até R$ 5.000",
            "R$ 5.001 - R$ 10.000",
            "R$ 10.001 - R$ 20.000",
            "R$ 20.001 - R$ 50.000",
            "R$ 50.001 - R$ 100.000",
            "Acima de R$ 100.000",
        ],
        assets_options: [
            "Até R$ 100.000",
            "R$ 100.001 - R$ 300.000",
            "R$ 300.001 - R$ 1.000.000",
            "R$ 1.000.001 - R$ 5.000.000",
            "R$ 5.000.001 - R$ 10.000.000",
            "Acima de R$ 10.000.000",
        ],
        investment_experience_options: [
            "Iniciante (poupança, CDB)",
            "Intermediário (fundos, ações)",
            "Avançado (derivativos, FIPs)",
            "Profissional (gestão de recursos)",
        ],
        risk_profile_options: ["Conservador", "Moderado", "Arrojado", "Super Arrojado"],
        investment_value_options: [
            "R$ 50.000 - R$ 100.000",
            "R$ 100.001 - R$ 250.000",
            "R$ 250.001 - R$ 500.000",
            "R$ 500.001 - R$ 1.000.000",
            "R$ 1.000.001 - R$ 2.000.000",
            "Acima de R$ 2.000.000",
        ],
        investment_horizon_options: ["3 - 5 anos", "5-10 anos", "Mais de 10 anos"],
        accredited_status_options: [
            "Possuo patrimônio financeiro de pelo menos R$ 1.000.000",
            "Possuo certificação profissional (CPA-20, CFA, CNPI, etc.)",
            "Sou profissional do mercado financeiro",
            "Preciso verificar minha qualificação",
        ],
        accreditation_proof_options: [
            "Extrato de corretora",
            "Declaração de Imposto de Renda",
            "Certificado profissional",
            "Carta do empregador",
            "Outros documentos",
        ],
        how_did_you_hear_options: [
            "LinkedIn",
            "Google",
            "Indicação",
            "Mídia (jornal, revista)",
            "Evento",
            "Site da empresa",
            "Outros",
        ],

        qualified_warning_title: "Aviso Importante",
        qualified_warning_text: "Este investimento envolve riscos significativos e pode resultar na perda total do capital investido. Leia atentamente todos os documentos antes de tomar sua decisão de investimento.",

        agree_terms: "Concordo com os Termos de Uso e declaro estar ciente dos riscos associados a investimentos em empresas de capital fechado",
        agree_privacy: "Concordo com a Política de Privacidade e autorizo o tratamento dos meus dados conforme a LGPD",
        confirm_accuracy: "Declaro que todas as informações fornecidas são verdadeiras e precisas",
        authorize_contact: "Autorizo contato da Pele Rara para apresentação de oportunidades de investimento",

        previous: "Anterior",
        next: "Próximo",
        submit: "Enviar Registro",
        submitting: "Enviando...",

        missing_field: "Preencha o campo obrigatório:",
        missing_consents: "Por favor, aceite todos os termos obrigatórios.",
        relay_success: "✅ Formulário enviado com sucesso!",
        fallback_opened: "📧 Abrindo seu cliente de email para enviar o formulário...",

        interest_registered: "Interesse Registrado com Sucesso!",
        relay_success_detail: "Seu formulário de registro foi enviado para o email",
        next_steps_title: "Próximos Passos:",
        next_steps: [
            "Nossa equipe analisará suas informações em até 24 horas úteis",
            "Você receberá um NDA (Acordo de Confidencialidade) para assinatura",
            "Agendaremos uma reunião para apresentação detalhada da oportunidade",
            "Iniciaremos o processo de due diligence e documentação",
        ],
        email_opened_automatically: "Seu cliente de email foi aberto automaticamente com todas as informações preenchidas.",
        recipient_email: "Destinatário:",
        whatsapp_contact: "WhatsApp:",
        email_not_opened: "Se o email não abriu automaticamente, clique no botão abaixo:",
        open_email_button: "Abrir Email para Cynthia",
        submit_new_interest: "Enviar Novo Interesse",
    },

    modal: ModalCopy {
        title: "Como deseja investir?",
        subtitle: "Escolha a melhor forma de entrar em contato conosco",
        minimum_badge: "Investimento mínimo: R$ 500 mil",
        recommended: "Recomendado",
        form_title: "Registro de Investidor Qualificado",
        official_contact: "Contato oficial:",
        register_title: "Registro Completo de Investidor",
        register_description: "Formulário completo com verificação de investidor qualificado",
        whatsapp_title: "WhatsApp Direto",
        whatsapp_description: "Falar agora mesmo com nossa equipe",
        email_title: "Email para Reunião",
        email_description: "Enviar interesse por email",
        website_title: "Site Oficial",
        website_description: "Conhecer mais sobre a empresa",
        back: "← Voltar",
        close: "Fechar",
    },

    faq_title: "Perguntas Frequentes dos Investidores",
    faq_subtitle: "Esclarecemos as principais dúvidas sobre a oportunidade",
    faq_contact: "Tem outras dúvidas?",
    faq_contact_link: "Entre em contato conosco",
    faq: [
        Faq {
            question: "E se vocês não atingirem R$ 10M na captação?",
            answer: "Seguiremos com execução parcial a partir de R$ 3M, mantendo contratos válidos e abrindo nova rodada futura. Nossa estratégia é flexível e permite crescimento gradual mesmo com captação parcial.",
        },
        Faq {
            question: "O que acontece se houver nova rodada de investimento?",
            answer: "Investidores desta rodada terão participação com base no valuation ajustado (R$ 200M), ganhando vantagem caso a próxima rodada seja com valuation superior. Temos cláusulas de anti-diluição para proteger investidores iniciais.",
        },
        Faq {
            question: "Qual é o diferencial competitivo da Pele Rara?",
            answer: "Possuímos duas tecnologias patenteadas (BIOCIC e BIOBLOC) com validação científica internacional, foco em nicho especializado pouco atendido por grandes marcas, e mais de 10 anos de pesquisa. Nossa nanotecnologia proprietária oferece resultados 2x mais rápidos que produtos convencionais.",
        },
        Faq {
            question: "Como funciona o mútuo conversível?",
            answer: "O investimento será realizado via mútuo conversível com valuation cap de R$ 200 milhões (30% desconto sobre valuation pre-money de R$ 290M). Na próxima rodada (Série A), o valor se converte automaticamente em participação societária com condições vantajosas para o investidor.",
        },
        Faq {
            question: "Quais são as garantias para o investidor?",
            answer: "Oferecemos governança sólida com assento no Conselho para investimentos >R$ 1M, direitos de veto, tag along, vesting de fundadores (4 anos), cláusulas anti-diluição e relatórios mensais. Patentes avaliadas em R$ 95-187M e 13 produtos já registrados na ANVISA garantem solidez do negócio.",
        },
        Faq {
            question: "Qual é a estratégia de saída para investidores?",
            answer: "Planejamos crescimento orgânico com possibilidade de aquisição estratégica por multinacionais farmacêuticas ou IPO em 5-7 anos. O mercado de dermocosméticos tem múltiplos históricos de 15-25x EBITDA. Nossa estratégia de expansão para 10.525 PDVs em 5 anos maximiza o valor para saída.",
        },
    ],

    footer_text: "Nossa pele é nossa história",
    footer_motto: "Celebramos cada marca",
    footer_additional: "AFINAL, SÓ TEM CICATRIZES QUEM SOBREVIVEU",

    investment_email_subject: "Interesse em Investir - Pele Rara",
    investment_email_body: "Gostaria de agendar uma reunião para conhecer a oportunidade de investimento.\n\nNome:\nTelefone:\nEmpresa:\nTicket de Interesse:",
    whatsapp_message: "Olá! Tenho interesse na oportunidade de investimento da Pele Rara. Gostaria de agendar uma reunião para conhecer mais detalhes.",
    whatsapp_tooltip: "Fale conosco no WhatsApp",
    language_selector_label: "Idioma",
    image_unavailable: "Imagem indisponível",
    not_found_title: "Página não encontrada",
    not_found_text: "O endereço acessado não existe.",
    back_home: "Voltar ao início",
};

//! Message catalogue in English, Portuguese, Spanish and French.

use super::Language;

macro_rules! catalog {
    ($($variant:ident => [$en:expr, $pt:expr, $es:expr, $fr:expr $(,)?],)*) => {
        /// Every user-facing message the CLI prints.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Message {
            $($variant,)*
        }

        impl Message {
            pub const ALL: &'static [Message] = &[$(Message::$variant,)*];

            pub(crate) fn text(self, language: Language) -> &'static str {
                let [en, pt, es, fr] = match self {
                    $(Message::$variant => [$en, $pt, $es, $fr],)*
                };
                match language {
                    Language::En => en,
                    Language::Pt => pt,
                    Language::Es => es,
                    Language::Fr => fr,
                }
            }
        }
    };
}

catalog! {
    // Bump flow
    VersionControl => [
        "Version Control System",
        "Sistema de Controle de Versão",
        "Sistema de Control de Versiones",
        "Système de Contrôle de Version",
    ],
    CurrentVersion => ["Current version:", "Versão atual:", "Versión actual:", "Version actuelle:"],
    AnalyzingCommit => [
        "Analyzing last commit...",
        "Analisando último commit...",
        "Analizando último commit...",
        "Analyse du dernier commit...",
    ],
    CommitMessage => ["Commit message:", "Mensagem do commit:", "Mensaje del commit:", "Message du commit:"],
    FilesModified => [
        "Files modified:",
        "Arquivos modificados:",
        "Archivos modificados:",
        "Fichiers modifiés:",
    ],
    AndMore => ["and", "e mais", "y más", "et plus"],
    ChangeAnalysis => [
        "Change analysis:",
        "Análise da mudança:",
        "Análisis del cambio:",
        "Analyse du changement:",
    ],
    SuggestedType => ["Suggested type:", "Tipo sugerido:", "Tipo sugerido:", "Type suggéré:"],
    NewVersion => ["New version:", "Nova versão:", "Nueva versión:", "Nouvelle version:"],
    UpdateVersion => [
        "Update version? (y/n)",
        "Deseja atualizar a versão? (s/n)",
        "¿Actualizar versión? (s/n)",
        "Mettre à jour la version? (o/n)",
    ],
    VersionNotChanged => [
        "Version not changed.",
        "Versão não alterada.",
        "Versión no cambiada.",
        "Version non modifiée.",
    ],
    ConfirmVersionType => [
        "Confirm version type:",
        "Confirme o tipo de versão:",
        "Confirme el tipo de versión:",
        "Confirmez le type de version:",
    ],
    MajorDesc => [
        "Breaking changes",
        "Breaking changes",
        "Cambios incompatibles",
        "Changements incompatibles",
    ],
    MinorDesc => ["New feature", "Nova funcionalidade", "Nueva funcionalidad", "Nouvelle fonctionnalité"],
    PatchDesc => ["Bug fix", "Correção de bug", "Corrección de errores", "Correction de bug"],
    Choose => ["Choose", "Escolha", "Elija", "Choisissez"],
    InvalidOption => [
        "Invalid option. Enter 1, 2, or 3",
        "Opção inválida. Digite 1, 2 ou 3",
        "Opción inválida. Ingrese 1, 2 o 3",
        "Option invalide. Entrez 1, 2 ou 3",
    ],
    InvalidResponse => [
        "Invalid response. Enter 'y' for yes or 'n' for no",
        "Resposta inválida. Digite 's' para sim ou 'n' para não",
        "Respuesta inválida. Ingrese 's' para sí o 'n' para no",
        "Réponse invalide. Entrez 'o' pour oui ou 'n' pour non",
    ],
    UpdatingFiles => [
        "Updating files...",
        "Atualizando arquivos...",
        "Actualizando archivos...",
        "Mise à jour des fichiers...",
    ],
    VersionUpdatedTo => [
        "Version updated to",
        "Versão atualizada para",
        "Versión actualizada a",
        "Version mise à jour vers",
    ],
    Error => ["Error:", "Erro:", "Error:", "Erreur:"],
    NoCommitFound => [
        "No commit found. Make a commit first.",
        "Nenhum commit encontrado. Faça um commit primeiro.",
        "No se encontró commit. Haga un commit primero.",
        "Aucun commit trouvé. Faites un commit d'abord.",
    ],
    DryRun => [
        "Dry run: no files were changed.",
        "Simulação: nenhum arquivo foi alterado.",
        "Simulación: no se modificó ningún archivo.",
        "Simulation : aucun fichier n'a été modifié.",
    ],

    // Analyzer reasons
    BreakingChange => [
        "🔴 Commit indicates BREAKING change or functionality removal",
        "🔴 Commit indica mudança BREAKING ou remoção de funcionalidade",
        "🔴 Commit indica cambio BREAKING o eliminación de funcionalidad",
        "🔴 Commit indique un changement BREAKING ou suppression de fonctionnalité",
    ],
    ConfigFilesModified => [
        "🟡 Configuration files modified",
        "🟡 Arquivos de configuração modificados",
        "🟡 Archivos de configuración modificados",
        "🟡 Fichiers de configuration modifiés",
    ],
    NewFeatureIndicated => [
        "🟡 Commit indicates new feature",
        "🟡 Commit indica nova funcionalidade",
        "🟡 Commit indica nueva funcionalidad",
        "🟡 Commit indique une nouvelle fonctionnalité",
    ],
    NewFilesAdded => [
        "new file(s) added",
        "arquivo(s) novo(s) adicionado(s)",
        "archivo(s) nuevo(s) agregado(s)",
        "nouveau(x) fichier(s) ajouté(s)",
    ],
    BugFixIndicated => [
        "🟢 Commit indicates bug fix",
        "🟢 Commit indica correção de bug",
        "🟢 Commit indica corrección de error",
        "🟢 Commit indique une correction de bug",
    ],
    SmallChange => [
        "🟢 Small change/adjustment",
        "🟢 Pequena mudança/ajuste",
        "🟢 Pequeño cambio/ajuste",
        "🟢 Petit changement/ajustement",
    ],

    // File updates
    PackageJsonUpdated => [
        "package.json updated",
        "package.json atualizado",
        "package.json actualizado",
        "package.json mis à jour",
    ],
    Updated => ["updated", "atualizado", "actualizado", "mis à jour"],
    ChangelogNotFound => [
        "CHANGELOG.md not found",
        "CHANGELOG.md não encontrado",
        "CHANGELOG.md no encontrado",
        "CHANGELOG.md non trouvé",
    ],
    NoNewCommits => [
        "No new commits found",
        "Nenhum commit novo encontrado",
        "No se encontraron commits nuevos",
        "Aucun nouveau commit trouvé",
    ],
    ChangelogAlreadyHasVersion => [
        "CHANGELOG.md already has an entry for",
        "CHANGELOG.md já possui uma entrada para",
        "CHANGELOG.md ya tiene una entrada para",
        "CHANGELOG.md contient déjà une entrée pour",
    ],
    ChangelogUpdated => [
        "CHANGELOG.md updated with",
        "CHANGELOG.md atualizado com",
        "CHANGELOG.md actualizado con",
        "CHANGELOG.md mis à jour avec",
    ],
    Commits => ["commit(s)", "commit(s)", "commit(s)", "commit(s)"],
    InitialRelease => ["Initial Release", "Lançamento Inicial", "Lanzamiento Inicial", "Version Initiale"],
    FirstPublicVersion => [
        "First public release of the project.",
        "Primeira versão pública do projeto.",
        "Primera versión pública del proyecto.",
        "Première version publique du projet.",
    ],

    // Publish sequence
    ExecutingGitCommands => [
        "Executing git commands...",
        "Executando comandos git...",
        "Ejecutando comandos git...",
        "Exécution des commandes git...",
    ],
    FilesAdded => ["Files added", "Arquivos adicionados", "Archivos agregados", "Fichiers ajoutés"],
    CommitCreated => ["Commit created", "Commit criado", "Commit creado", "Commit créé"],
    TagCreated => ["Tag created", "Tag criada", "Tag creado", "Tag créé"],
    PushCompleted => ["Push completed", "Push realizado", "Push completado", "Push effectué"],
    TagsPushed => ["Tags pushed", "Tags enviadas", "Tags enviados", "Tags envoyés"],
    VersionPublished => [
        "Version published successfully!",
        "Versão publicada com sucesso!",
        "¡Versión publicada con éxito!",
        "Version publiée avec succès!",
    ],
    ErrorExecutingGit => [
        "Error executing git commands:",
        "Erro ao executar comandos git:",
        "Error al ejecutar comandos git:",
        "Erreur lors de l'exécution des commandes git:",
    ],
    ExecuteManually => [
        "Execute manually:",
        "Execute manualmente:",
        "Ejecute manualmente:",
        "Exécutez manuellement:",
    ],

    // Smart commit
    SmartCommit => [
        "Smart Commit - Auto Message",
        "Smart Commit - Mensagem Automática",
        "Smart Commit - Mensaje Automático",
        "Smart Commit - Message Automatique",
    ],
    NoStagedFiles => [
        "No staged files found.",
        "Nenhum arquivo em stage encontrado.",
        "No se encontraron archivos en stage.",
        "Aucun fichier stagé trouvé.",
    ],
    HowToUse => ["How to use:", "Como usar:", "Cómo usar:", "Comment utiliser:"],
    MakeChanges => [
        "Make your changes",
        "Faça suas alterações",
        "Haga sus cambios",
        "Faites vos modifications",
    ],
    StageFiles => ["Stage files:", "Adicione ao stage:", "Agregue al stage:", "Stagez les fichiers:"],
    RunCommand => ["Run:", "Execute:", "Ejecute:", "Exécutez:"],
    StagedFiles => ["Staged files:", "Arquivos em stage:", "Archivos en stage:", "Fichiers stagés:"],
    AndMoreFiles => [
        "and more file(s)",
        "e mais arquivo(s)",
        "y más archivo(s)",
        "et plus de fichier(s)",
    ],
    AnalyzingChanges => [
        "Analyzing changes...",
        "Analisando mudanças...",
        "Analizando cambios...",
        "Analyse des changements...",
    ],
    GeneratedMessage => [
        "Generated commit message:",
        "Mensagem de commit gerada:",
        "Mensaje de commit generado:",
        "Message de commit généré:",
    ],
    Details => ["Details:", "Detalhes:", "Detalles:", "Détails:"],
    Type => ["Type:", "Tipo:", "Tipo:", "Type:"],
    Scope => ["Scope:", "Escopo:", "Alcance:", "Portée:"],
    Description => ["Description:", "Descrição:", "Descripción:", "Description:"],
    Options => ["Options:", "Opções:", "Opciones:", "Options:"],
    OptionCommit => ["Commit", "Commitar", "Commitear", "Committer"],
    OptionEdit => ["Edit", "Editar", "Editar", "Éditer"],
    OptionCancel => ["Cancel", "Cancelar", "Cancelar", "Annuler"],
    Choice => ["Choice", "Escolha", "Opción", "Choix"],
    InvalidEnter => [
        "Invalid. Enter 1, 2, or 3",
        "Inválido. Digite 1, 2 ou 3",
        "Inválido. Ingrese 1, 2 o 3",
        "Invalide. Entrez 1, 2 ou 3",
    ],
    EnterCommitMessage => [
        "Enter your commit message",
        "Digite sua mensagem de commit",
        "Ingrese su mensaje de commit",
        "Entrez votre message de commit",
    ],
    EmptyMessage => [
        "Empty message. Commit cancelled.",
        "Mensagem vazia. Commit cancelado.",
        "Mensaje vacío. Commit cancelado.",
        "Message vide. Commit annulé.",
    ],
    CommitCancelled => ["Commit cancelled.", "Commit cancelado.", "Commit cancelado.", "Commit annulé."],
    Committing => ["Committing...", "Commitando...", "Commiteando...", "Commit en cours..."],
    CommitSuccess => [
        "Commit created successfully!",
        "Commit criado com sucesso!",
        "¡Commit creado con éxito!",
        "Commit créé avec succès!",
    ],
    CommitFailed => [
        "Failed to create commit",
        "Falha ao criar commit",
        "Error al crear commit",
        "Échec de la création du commit",
    ],

    // Language configuration
    ToChangeLanguage => [
        "To change language:",
        "Para mudar o idioma:",
        "Para cambiar el idioma:",
        "Pour changer la langue:",
    ],
    AvailableLanguages => [
        "Available languages: en, pt, es, fr",
        "Idiomas disponíveis: en, pt, es, fr",
        "Idiomas disponibles: en, pt, es, fr",
        "Langues disponibles: en, pt, es, fr",
    ],
    LanguageSet => ["Language set to", "Idioma configurado para", "Idioma configurado a", "Langue configurée à"],
    LanguageCleared => [
        "Language configuration cleared. Using system default.",
        "Configuração de idioma removida. Usando padrão do sistema.",
        "Configuración de idioma eliminada. Usando predeterminado del sistema.",
        "Configuration de langue supprimée. Utilisation du système par défaut.",
    ],
    InvalidLanguage => [
        "Invalid language. Available: en, pt, es, fr",
        "Idioma inválido. Disponíveis: en, pt, es, fr",
        "Idioma inválido. Disponibles: en, pt, es, fr",
        "Langue invalide. Disponibles: en, pt, es, fr",
    ],
    CurrentLanguageIs => ["Current language:", "Idioma atual:", "Idioma actual:", "Langue actuelle:"],
    ConfiguredManually => [
        "manually configured",
        "configurado manualmente",
        "configurado manualmente",
        "configurée manuellement",
    ],
    DetectedFromSystem => [
        "detected from system",
        "detectado do sistema",
        "detectado del sistema",
        "détectée du système",
    ],
}

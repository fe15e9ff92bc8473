use crate::commands::{self, CommandResult};
use crate::presentation::output;
use anyhow::{Context, Result, bail};
use argh::{EarlyExit, FromArgs};
use chrono::NaiveDate;
use doodstream::{
    AccountReportsOptions, CloneOptions, CreateFolderOptions, DmcaListOptions, ListFilesOptions,
    ListFolderOptions, RemoteActionsOptions, RemoteAddOptions,
};
use std::path::PathBuf;

/// 使用方法に表示するコマンド名
const COMMAND_NAME: &str = "doodstream";

#[derive(FromArgs, Debug)]
#[argh(
    description = "command-line client for the Doodstream video hosting API",
    note = "DOODSTREAM_API_KEY overrides the stored API key."
)]
pub struct Options {
    #[argh(
        switch,
        description = "output machine-readable JSON to stdout, for both success and error"
    )]
    pub machine: bool,

    #[argh(subcommand)]
    pub command: Option<Command>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Login(LoginArgs),
    Logout(LogoutArgs),
    Status(StatusArgs),
    Account(AccountArgs),
    Reports(ReportsArgs),
    Dmca(DmcaArgs),
    UploadServer(UploadServerArgs),
    Upload(UploadArgs),
    RemoteAdd(RemoteAddArgs),
    RemoteList(RemoteListArgs),
    RemoteStatus(RemoteStatusArgs),
    RemoteSlots(RemoteSlotsArgs),
    RemoteActions(RemoteActionsArgs),
    FolderCreate(FolderCreateArgs),
    FolderRename(FolderRenameArgs),
    FolderList(FolderListArgs),
    Files(FilesArgs),
    FileStatus(FileStatusArgs),
    FileInfo(FileInfoArgs),
    FileImage(FileImageArgs),
    FileRename(FileRenameArgs),
    FileMove(FileMoveArgs),
    CloneVideo(CloneArgs),
    Search(SearchArgs),
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "login", description = "verify and store your API key")]
pub struct LoginArgs {
    #[argh(switch, description = "read the key from the first line of stdin")]
    stdin: bool,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "logout", description = "remove the stored API key")]
pub struct LogoutArgs {}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "status",
    description = "check whether the API key is accepted"
)]
pub struct StatusArgs {}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "account", description = "account information")]
pub struct AccountArgs {}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "reports",
    description = "account reports (default: last 7 days)"
)]
pub struct ReportsArgs {
    #[argh(option, description = "number of days to report")]
    last: Option<u32>,

    #[argh(option, from_str_fn(parse_date), description = "start date (YYYY-MM-DD)")]
    from: Option<NaiveDate>,

    #[argh(option, from_str_fn(parse_date), description = "end date (YYYY-MM-DD)")]
    to: Option<NaiveDate>,
}

impl ReportsArgs {
    fn options(&self) -> AccountReportsOptions {
        AccountReportsOptions {
            last: self.last,
            from_date: self.from,
            to_date: self.to,
        }
    }
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "dmca", description = "DMCA reported files")]
pub struct DmcaArgs {
    #[argh(option, description = "page number")]
    page: Option<u32>,

    #[argh(option, description = "results per page")]
    per_page: Option<u32>,
}

impl DmcaArgs {
    fn options(&self) -> DmcaListOptions {
        DmcaListOptions {
            per_page: self.per_page,
            page: self.page,
        }
    }
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "upload-server",
    description = "show the server used for local uploads"
)]
pub struct UploadServerArgs {}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "upload", description = "upload a local file")]
pub struct UploadArgs {
    #[argh(positional, description = "the file to upload")]
    file: PathBuf,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "remote-add",
    description = "upload from a direct link"
)]
pub struct RemoteAddArgs {
    #[argh(positional, description = "the direct link to the video")]
    url: String,

    #[argh(option, description = "destination folder ID")]
    folder: Option<String>,

    #[argh(option, description = "title for the uploaded video")]
    title: Option<String>,
}

impl RemoteAddArgs {
    fn options(&self) -> RemoteAddOptions {
        RemoteAddOptions {
            folder_id: self.folder.clone(),
            new_title: self.title.clone(),
        }
    }
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "remote-list",
    description = "remote uploads and their status"
)]
pub struct RemoteListArgs {}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "remote-status",
    description = "status of one remote upload"
)]
pub struct RemoteStatusArgs {
    #[argh(positional, description = "the file code")]
    file_code: String,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "remote-slots",
    description = "total and used remote upload slots"
)]
pub struct RemoteSlotsArgs {}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "remote-actions",
    description = "restart or clear remote uploads"
)]
pub struct RemoteActionsArgs {
    #[argh(switch, description = "restart failed uploads")]
    restart_errors: bool,

    #[argh(switch, description = "clear failed uploads")]
    clear_errors: bool,

    #[argh(switch, description = "clear all uploads")]
    clear_all: bool,

    #[argh(option, description = "file code of the upload to delete")]
    delete: Option<String>,
}

impl RemoteActionsArgs {
    fn options(&self) -> RemoteActionsOptions {
        RemoteActionsOptions {
            clear_errors: Some(self.clear_errors),
            clear_all: Some(self.clear_all),
            delete_code: self.delete.clone(),
        }
    }
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "folder-create", description = "create a folder")]
pub struct FolderCreateArgs {
    #[argh(positional, description = "the folder name")]
    name: String,

    #[argh(option, description = "parent folder ID")]
    parent: Option<String>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "folder-rename", description = "rename a folder")]
pub struct FolderRenameArgs {
    #[argh(positional, description = "the folder ID")]
    folder_id: String,

    #[argh(positional, description = "the new folder name")]
    name: String,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "folder-list",
    description = "list the contents of a folder"
)]
pub struct FolderListArgs {
    #[argh(positional, description = "the folder ID (0 for root)")]
    folder_id: String,

    #[argh(switch, description = "list only sub-folders")]
    only_folders: bool,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "files", description = "list files")]
pub struct FilesArgs {
    #[argh(option, description = "page number")]
    page: Option<u32>,

    #[argh(option, description = "results per page")]
    per_page: Option<u32>,

    #[argh(option, description = "only files in this folder")]
    folder: Option<String>,

    #[argh(option, description = "only files created after a time or within minutes")]
    created: Option<String>,
}

impl FilesArgs {
    fn options(&self) -> ListFilesOptions {
        ListFilesOptions {
            page: self.page,
            per_page: self.per_page,
            folder_id: self.folder.clone(),
            created: self.created.clone(),
        }
    }
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "file-status", description = "check whether a file is available")]
pub struct FileStatusArgs {
    #[argh(positional, description = "the file code")]
    file_code: String,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "file-info", description = "file information")]
pub struct FileInfoArgs {
    #[argh(positional, description = "the file code")]
    file_code: String,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "file-image", description = "file thumbnail and splash images")]
pub struct FileImageArgs {
    #[argh(positional, description = "the file code")]
    file_code: String,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "file-rename", description = "rename a file")]
pub struct FileRenameArgs {
    #[argh(positional, description = "the file code")]
    file_code: String,

    #[argh(positional, description = "the new title")]
    title: String,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "file-move", description = "move a file to another folder")]
pub struct FileMoveArgs {
    #[argh(positional, description = "the file code")]
    file_code: String,

    #[argh(positional, description = "the destination folder ID (0 for root)")]
    folder_id: String,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "clone", description = "copy a file into your account")]
pub struct CloneArgs {
    #[argh(positional, description = "the file code")]
    file_code: String,

    #[argh(option, description = "destination folder ID")]
    folder: Option<String>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "search", description = "search your files")]
pub struct SearchArgs {
    #[argh(positional, description = "the search term (use -- before terms starting with -)")]
    term: String,
}

/// 日付オプションの解析
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected a date (YYYY-MM-DD), got '{}'", value))
}

/// CLI引数を解析する
///
/// `--help` の場合は使用方法を表示して `Ok(None)` を返す。
/// 不正な引数は argh のメッセージをそのままエラーにする。
pub fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    match Options::from_args(&[COMMAND_NAME], &rest) {
        Ok(options) => Ok(Some(options)),
        Err(EarlyExit {
            output,
            status: Ok(()),
        }) => {
            output::print_usage(&output);
            Ok(None)
        }
        Err(EarlyExit {
            output,
            status: Err(()),
        }) => bail!("{}", output.trim_end()),
    }
}

/// `--help` と同じ使用方法テキスト
fn usage() -> String {
    match Options::from_args(&[COMMAND_NAME], &["--help"]) {
        Err(early_exit) => early_exit.output,
        Ok(_) => String::new(),
    }
}

/// 解析済みのサブコマンドを実行する
pub async fn dispatch(command: Option<Command>) -> Result<CommandResult> {
    let Some(command) = command else {
        output::print_usage(&usage());
        return Ok(CommandResult::Help);
    };

    match command {
        Command::Login(args) => commands::login::execute(args.stdin)
            .await
            .context("Login command failed"),
        Command::Logout(_) => commands::logout::execute().context("Logout command failed"),
        Command::Status(_) => commands::status::execute()
            .await
            .context("Status command failed"),
        Command::Account(_) => commands::account::info()
            .await
            .context("Account command failed"),
        Command::Reports(args) => commands::account::reports(&args.options())
            .await
            .context("Reports command failed"),
        Command::Dmca(args) => commands::account::dmca(&args.options())
            .await
            .context("DMCA command failed"),
        Command::UploadServer(_) => commands::upload::server()
            .await
            .context("Upload server command failed"),
        Command::Upload(args) => commands::upload::local(&args.file)
            .await
            .context("Upload command failed"),
        Command::RemoteAdd(args) => commands::remote::add(&args.url, &args.options())
            .await
            .context("Remote add command failed"),
        Command::RemoteList(_) => commands::remote::list()
            .await
            .context("Remote list command failed"),
        Command::RemoteStatus(args) => commands::remote::status(&args.file_code)
            .await
            .context("Remote status command failed"),
        Command::RemoteSlots(_) => commands::remote::slots()
            .await
            .context("Remote slots command failed"),
        Command::RemoteActions(args) => {
            commands::remote::actions(args.restart_errors, &args.options())
                .await
                .context("Remote actions command failed")
        }
        Command::FolderCreate(args) => {
            let options = CreateFolderOptions {
                parent_id: args.parent.clone(),
            };
            commands::folders::create(&args.name, &options)
                .await
                .context("Folder create command failed")
        }
        Command::FolderRename(args) => commands::folders::rename(&args.folder_id, &args.name)
            .await
            .context("Folder rename command failed"),
        Command::FolderList(args) => {
            let options = ListFolderOptions {
                only_folders: Some(args.only_folders),
            };
            commands::folders::list(&args.folder_id, &options)
                .await
                .context("Folder list command failed")
        }
        Command::Files(args) => commands::files::list(&args.options())
            .await
            .context("Files command failed"),
        Command::FileStatus(args) => commands::files::status(&args.file_code)
            .await
            .context("File status command failed"),
        Command::FileInfo(args) => commands::files::info(&args.file_code)
            .await
            .context("File info command failed"),
        Command::FileImage(args) => commands::files::image(&args.file_code)
            .await
            .context("File image command failed"),
        Command::FileRename(args) => commands::files::rename(&args.file_code, &args.title)
            .await
            .context("File rename command failed"),
        Command::FileMove(args) => commands::files::move_to(&args.file_code, &args.folder_id)
            .await
            .context("File move command failed"),
        Command::CloneVideo(args) => {
            let options = CloneOptions {
                folder_id: args.folder.clone(),
            };
            commands::files::clone(&args.file_code, &options)
                .await
                .context("Clone command failed")
        }
        Command::Search(args) => commands::files::search(&args.term)
            .await
            .context("Search command failed"),
    }
}
